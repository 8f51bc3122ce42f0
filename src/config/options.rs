//! Tolerance options for "nearly equal" comparisons.
//!
//! This module provides the `ToleranceOptions` struct, which carries the
//! relative tolerance used when comparing scalars and vectors. The default
//! tolerance is the smallest positive representable value, which turns the
//! comparison into a near-exact equality robust only to ULP-level noise.

use crate::core::traits::Scalar;
use crate::utils::tolerance::nearly_equal_values;
use crate::vector::{Vector, nearly_equal};

/// Comparison tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceOptions<T> {
    /// Relative tolerance; must be non-negative.
    pub eps: T,
}

impl<T: Scalar> ToleranceOptions<T> {
    pub fn relative(eps: T) -> Self {
        Self { eps }
    }

    /// Near-exact comparison, as used by `deeply_equal`.
    pub fn exact() -> Self {
        Self { eps: T::smallest_positive() }
    }

    pub fn values_match(&self, x: T, y: T) -> bool {
        nearly_equal_values(x, y, self.eps)
    }

    pub fn vectors_match(&self, u: &Vector<T>, v: &Vector<T>) -> bool {
        nearly_equal(u, v, self.eps)
    }
}

impl<T: Scalar> Default for ToleranceOptions<T> {
    fn default() -> Self {
        Self::exact()
    }
}
