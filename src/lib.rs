//! nvec: Euclidean vector arithmetic over variable-length real vectors
//!
//! This crate provides tolerance-based comparison, zero-padded addition, scaling,
//! inner and cross products, magnitude, normalization and distance for vectors whose
//! dimensions may differ from one operand to the next.

pub mod config;
pub mod core;
pub mod error;
pub mod set;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use error::*;
pub use set::{DimensionOrder, VectorSet};
pub use utils::*;
pub use vector::*;
