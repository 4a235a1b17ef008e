//! Error types for state operations

use thiserror::Error;

/// Errors that can occur during state manipulation or sampling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Amplitude or matrix data of the wrong size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// State drifted away from unit norm / unit trace
    #[error("State not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Measurement requested with zero shots
    #[error("Shot count must be positive, got {shots}")]
    InvalidShotCount { shots: usize },

    /// Probability distribution collapsed to zero mass
    #[error("Degenerate probability distribution, total mass = {sum}")]
    DegenerateDistribution { sum: f64 },
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
