use thiserror::Error;

// Unified error type for nvec

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    /// An operation with a fixed shape requirement got operands of another dimension.
    #[error("{op}: vectors must be in {required} dimensions, got {left} and {right}")]
    Dimension {
        op: &'static str,
        required: usize,
        left: usize,
        right: usize,
    },
}

pub type VecResult<T> = Result<T, VecError>;
