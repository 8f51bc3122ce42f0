//! Vector arithmetic: comparison, addition, scaling, products and distance.

use super::Vector;
use crate::core::traits::Scalar;
use crate::error::{VecError, VecResult};
use crate::set::VectorSet;
use crate::utils::tolerance::nearly_equal_values;
use std::ops;

/// Element-wise equality within the smallest possible tolerance.
pub fn deeply_equal<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> bool {
    nearly_equal(u, v, T::smallest_positive())
}

/// Element-wise equality within relative tolerance `eps`.
///
/// Vectors of different dimension are never nearly equal; no padding applies here.
pub fn nearly_equal<T: Scalar>(u: &Vector<T>, v: &Vector<T>, eps: T) -> bool {
    if u.len() != v.len() {
        return false;
    }
    u.iter()
        .zip(v.iter())
        .all(|(&x, &y)| nearly_equal_values(x, y, eps))
}

/// True if the Euclidean distance between `u` and `v` is at most `eps`.
pub fn close<T: Scalar>(u: &Vector<T>, v: &Vector<T>, eps: T) -> bool {
    distance(u, v) <= eps
}

/// Sums any number of vectors, zero-padding the shorter ones.
///
/// The inputs are copied into a fresh [`VectorSet`], so their order and values
/// are left untouched. No vectors sum to the empty vector.
pub fn add<'a, T, I>(vecs: I) -> Vector<T>
where
    T: Scalar,
    I: IntoIterator<Item = &'a Vector<T>>,
{
    vecs.into_iter().cloned().collect::<VectorSet<T>>().padded_sum()
}

/// Scalar multiplication. The dimension is preserved, even when `n` is zero.
pub fn scale<T: Scalar>(v: &Vector<T>, n: T) -> Vector<T> {
    v.iter().map(|&el| el * n).collect()
}

/// Inner product, summed over the shorter vector only.
pub fn inner_product<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> T {
    // missing elements are zero, so the longer tail contributes nothing
    u.iter()
        .zip(v.iter())
        .fold(T::zero(), |sum, (&x, &y)| sum + x * y)
}

/// Alias for [`inner_product`] over the reals.
pub fn dot<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> T {
    inner_product(u, v)
}

/// Euclidean distance, `|u - v|`, with zero-padding for mismatched dimensions.
pub fn distance<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> T {
    add([u, &scale(v, -T::one())]).mag()
}

/// Cross product in three dimensions.
///
/// Both operands must be exactly 3-dimensional; nothing is padded or truncated.
pub fn cross<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> VecResult<Vector<T>> {
    if u.len() != 3 || v.len() != 3 {
        tracing::debug!(left = u.len(), right = v.len(), "cross product needs 3-dimensional operands");
        return Err(VecError::Dimension {
            op: "cross",
            required: 3,
            left: u.len(),
            right: v.len(),
        });
    }
    Ok(Vector::from([
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]))
}

impl<T: Scalar> ops::Add for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Self) -> Vector<T> {
        add([self, rhs])
    }
}

impl<T: Scalar> ops::Sub for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Self) -> Vector<T> {
        add([self, &-rhs])
    }
}

impl<T: Scalar> ops::Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        scale(self, rhs)
    }
}

impl<T: Scalar> ops::Neg for &Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        scale(self, -T::one())
    }
}
