use thiserror::Error;

/// Top-level error type for the terracut crate.
#[derive(Debug, Error)]
pub enum TerracutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("shape kind mismatch: expected {expected}, found {found}")]
    ShapeKindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors raised by the physics world arena.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("body not found")]
    BodyNotFound,

    #[error("body has no fixture")]
    NoFixture,
}

/// Errors related to terrain operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`TerracutError`].
pub type Result<T> = std::result::Result<T, TerracutError>;
