//! Numeric helpers shared by the vector engine.

pub mod tolerance;
pub use tolerance::nearly_equal_values;
