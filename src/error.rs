//! Error types for u-reliability.

use thiserror::Error;

/// Broad category of a [`ReliabilityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on the caller's input was violated.
    InvalidArgument,
    /// The numerical procedure failed on otherwise valid input.
    Numeric,
}

/// All errors produced by u-reliability operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReliabilityError {
    /// A distribution parameter is non-positive or non-finite.
    #[error("{name} parameter must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The observation vector is empty.
    #[error("data vector must contain at least one observation")]
    EmptyData,

    /// Two parallel vectors have different lengths.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An observed time is non-positive or non-finite.
    #[error("observation {index} must be positive and finite, got {value}")]
    InvalidObservation { index: usize, value: f64 },

    /// The iteration cap is zero.
    #[error("maximum number of iterations must be greater than 0")]
    InvalidMaxIterations,

    /// The convergence tolerance is non-positive or non-finite.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    /// A batch draw asked for zero samples.
    #[error("number of samples must be greater than 0")]
    InvalidSampleCount,

    /// Every observation is right-censored.
    #[error("all {n} observations are censored; at least one failure is required")]
    AllCensored { n: usize },

    /// Newton-Raphson exhausted its iteration budget.
    #[error("Newton-Raphson did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },

    /// The fitted shape or scale is not a usable number.
    #[error("ill-conditioned data: shape = {shape}, scale = {scale}")]
    IllConditioned { shape: f64, scale: f64 },
}

impl ReliabilityError {
    /// Returns the category of this error.
    ///
    /// ```
    /// use u_reliability::error::{ErrorKind, ReliabilityError};
    ///
    /// assert_eq!(ReliabilityError::EmptyData.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(
    ///     ReliabilityError::NotConverged { iterations: 100 }.kind(),
    ///     ErrorKind::Numeric
    /// );
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConverged { .. } | Self::IllConditioned { .. } => ErrorKind::Numeric,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReliabilityError>;
