//! Error types shared by the solver and its collaborators

/// Errors produced by the library
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The price table violates a solver precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The samples cannot determine both quadratic coefficients.
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
