//! Comparison options.

pub mod options;
pub use options::ToleranceOptions;
