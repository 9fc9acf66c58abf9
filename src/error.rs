use thiserror::Error;

/// Top-level error type for the Muralis placement engine.
#[derive(Debug, Error)]
pub enum MuralisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the building model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("non-positive wall height: {0}")]
    InvalidHeight(f64),
}

/// Errors related to placement operations.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("placement failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MuralisError`].
pub type Result<T> = std::result::Result<T, MuralisError>;
