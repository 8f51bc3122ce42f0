//! Core traits and their implementations for plain slices.

pub mod traits;
pub mod wrappers;

pub use traits::{Dimensioned, InnerProduct, Scalar};
