use thiserror::Error;

/// Top-level error type for plangeo.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlangeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by geometric computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// An operation was handed the "no such point" sentinel.
    #[error("point does not exist")]
    NonExistentPoint,

    #[error("degenerate line: both a and b are zero")]
    DegenerateLine,
}

/// Errors raised while building values from caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlangeoError`].
pub type Result<T> = std::result::Result<T, PlangeoError>;
