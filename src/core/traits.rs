//! Core numeric traits for nvec.

use num_traits::Float;
use std::fmt;

/// Real scalar usable as a vector element.
pub trait Scalar: Float + fmt::Debug + fmt::Display + 'static {
    /// Smallest positive representable value (the smallest subnormal).
    fn smallest_positive() -> Self;
}

impl Scalar for f64 {
    fn smallest_positive() -> Self {
        f64::from_bits(1)
    }
}

impl Scalar for f32 {
    fn smallest_positive() -> Self {
        f32::from_bits(1)
    }
}

/// Anything with a dimension (element count).
pub trait Dimensioned {
    /// Number of elements.
    fn dim(&self) -> usize;
}

/// Inner products & norms.
pub trait InnerProduct<Rhs: ?Sized = Self> {
    /// Associated scalar type.
    type Scalar: Scalar;
    /// Compute dot(x, y) over the shorter operand's length.
    fn dot(&self, rhs: &Rhs) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn mag(&self) -> Self::Scalar;
}
