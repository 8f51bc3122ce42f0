//! Variable-length Euclidean vectors.
//!
//! A [`Vector`] is an ordered sequence of reals whose dimension is simply its
//! length. Vectors of different dimension are never equal, but addition and the
//! inner product combine them by treating missing high-index elements as zero.
//! All operations return new vectors; inputs are never mutated.

pub mod ops;

pub use ops::{add, close, cross, deeply_equal, distance, dot, inner_product, nearly_equal, scale};

use crate::core::traits::{Dimensioned, InnerProduct, Scalar};
use std::fmt;
use std::ops::Index;

/// An element of R^n, for any n.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of elements (the dimension).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar> Vector<T> {
    /// The zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![T::zero(); n] }
    }

    /// Magnitude (2-norm). Zero for the empty vector.
    pub fn mag(&self) -> T {
        inner_product(self, self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Returns `None` when the magnitude is zero, since the zero vector has no
    /// direction.
    pub fn unit(&self) -> Option<Self> {
        let mag = self.mag();
        if mag == T::zero() {
            tracing::trace!(dim = self.len(), "zero-magnitude vector has no unit vector");
            return None;
        }
        Some(scale(self, T::one() / mag))
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Dimensioned for Vector<T> {
    fn dim(&self) -> usize {
        self.len()
    }
}

impl<T: Scalar> InnerProduct for Vector<T> {
    type Scalar = T;
    fn dot(&self, rhs: &Self) -> T {
        inner_product(self, rhs)
    }
    fn mag(&self) -> T {
        Vector::mag(self)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Self { data: data.into() }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, el) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{el}")?;
        }
        write!(f, "]")
    }
}
