use thiserror::Error;

/// Top-level error type for the graphis kernel.
#[derive(Debug, Error)]
pub enum GraphisError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors from the one-variable inequality solvers.
///
/// Degenerate coefficients (zero leading term, zero slope) are not errors;
/// each has a documented solution branch. Only non-finite input is rejected.
#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("non-finite coefficient {name} = {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

/// Errors from two-variable region construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite parameter {name} = {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Convenience type alias for results using [`GraphisError`].
pub type Result<T> = std::result::Result<T, GraphisError>;
