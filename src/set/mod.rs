//! Vector collections: ordering by dimension and zero-padded summation.
//!
//! A [`VectorSet`] holds vectors of any mix of dimensions. Summing it yields a
//! vector as long as the longest member, with shorter members treated as if
//! padded with zeros on the right.
//!
//! [`VectorSet::sum`] sorts the set in place (longest first) before adding, so
//! callers observe the reordering afterwards. Use [`VectorSet::padded_sum`] or
//! [`crate::vector::add`] to keep the original order.

use crate::core::traits::{Dimensioned, Scalar};
use crate::error::VecResult;
use crate::vector::Vector;
use std::cmp::Ordering;

/// Sort direction for ordering vectors by dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionOrder {
    /// Shortest first.
    #[default]
    Ascending,
    /// Longest first.
    Descending,
}

impl DimensionOrder {
    pub fn compare<D: Dimensioned + ?Sized>(self, a: &D, b: &D) -> Ordering {
        match self {
            DimensionOrder::Ascending => a.dim().cmp(&b.dim()),
            DimensionOrder::Descending => b.dim().cmp(&a.dim()),
        }
    }
}

/// Ordered collection of vectors. May be empty and may hold empty vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet<T = f64> {
    vectors: Vec<Vector<T>>,
}

impl<T> VectorSet<T> {
    pub fn new() -> Self {
        Self { vectors: Vec::new() }
    }

    pub fn push(&mut self, v: Vector<T>) {
        self.vectors.push(v);
    }

    /// Number of vectors in the set.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Exchanges the vectors at `i` and `j` in place.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.vectors.swap(i, j);
    }

    /// True if the vector at `i` has fewer elements than the vector at `j`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.vectors[i].dim() < self.vectors[j].dim()
    }

    /// Stable in-place sort by dimension.
    pub fn sort(&mut self, order: DimensionOrder) {
        self.vectors.sort_by(|a, b| order.compare(a, b));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.vectors.iter()
    }

    pub fn as_slice(&self) -> &[Vector<T>] {
        &self.vectors
    }

    pub fn into_inner(self) -> Vec<Vector<T>> {
        self.vectors
    }
}

impl<T: Scalar> VectorSet<T> {
    /// Sorts the set longest first, then sums it with zero-padding.
    ///
    /// The reordering is left in place. The sum of an empty set is the empty
    /// vector. Never returns an error at present.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.len()))]
    pub fn sum(&mut self) -> VecResult<Vector<T>> {
        self.sort(DimensionOrder::Descending);
        Ok(self.padded_sum())
    }

    /// Zero-padded sum that leaves the set's order untouched.
    ///
    /// Members are visited longest first, in the same order [`VectorSet::sum`]
    /// would leave them, so both produce identical results.
    pub fn padded_sum(&self) -> Vector<T> {
        let mut ordered: Vec<&Vector<T>> = self.vectors.iter().collect();
        ordered.sort_by(|a, b| DimensionOrder::Descending.compare(*a, *b));
        let Some((longest, rest)) = ordered.split_first() else {
            return Vector::default();
        };
        let mut sum = (*longest).clone();
        for v in rest {
            for (acc, &el) in sum.as_mut_slice().iter_mut().zip(v.iter()) {
                *acc = *acc + el;
            }
        }
        sum
    }
}

impl<T> Default for VectorSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Vector<T>>> for VectorSet<T> {
    fn from(vectors: Vec<Vector<T>>) -> Self {
        Self { vectors }
    }
}

impl<T> FromIterator<Vector<T>> for VectorSet<T> {
    fn from_iter<I: IntoIterator<Item = Vector<T>>>(iter: I) -> Self {
        Self { vectors: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a VectorSet<T> {
    type Item = &'a Vector<T>;
    type IntoIter = std::slice::Iter<'a, Vector<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

impl<T> std::ops::Index<usize> for VectorSet<T> {
    type Output = Vector<T>;
    fn index(&self, index: usize) -> &Vector<T> {
        &self.vectors[index]
    }
}
