//! Core trait implementations for plain slices and `Vec<T>`.
//!
//! These let raw `&[T]` buffers take part in the same zero-padded inner product
//! as [`Vector`](crate::vector::Vector) without being wrapped first.

use crate::core::traits::{Dimensioned, InnerProduct, Scalar};

impl<T> Dimensioned for [T] {
    fn dim(&self) -> usize {
        self.len()
    }
}

impl<T> Dimensioned for Vec<T> {
    fn dim(&self) -> usize {
        self.len()
    }
}

/// Inner product over slices, bounded by the shorter slice.
impl<T: Scalar> InnerProduct for [T] {
    type Scalar = T;
    /// Computes `x^T y`; missing trailing elements count as zero.
    fn dot(&self, rhs: &[T]) -> T {
        self.iter()
            .zip(rhs.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
    /// Computes the Euclidean norm `||x||_2`.
    fn mag(&self) -> T {
        self.dot(self).sqrt()
    }
}
