//! Tolerance checks for scalar comparison.

use crate::core::traits::Scalar;

/// Returns true if the relative difference between `x` and `y` is at most `eps`.
///
/// The difference is measured against the mean of `|x|` and `|y|`, so `eps` is a
/// relative tolerance. Absolute differences no larger than
/// [`Scalar::smallest_positive`] always compare equal, which keeps the test
/// well-defined when both values sit next to zero.
pub fn nearly_equal_values<T: Scalar>(x: T, y: T, eps: T) -> bool {
    if x == y {
        return true;
    }
    let abs_diff = (x - y).abs();
    if abs_diff <= T::smallest_positive() {
        return true;
    }
    let two = T::one() + T::one();
    let avg_abs = (x.abs() + y.abs()) / two;
    abs_diff / avg_abs <= eps
}
