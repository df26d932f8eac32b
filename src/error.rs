//! Error types for the imgrand library.

use num_bigint::BigUint;

/// Errors produced by the imgrand library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The byte source failed (network, I/O, malformed payload or empty body).
    #[error("Byte source unavailable: {0}")]
    SourceUnavailable(String),
    /// The requested range has `min > max`.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: BigUint, max: BigUint },
    /// A minimum was supplied without a maximum.
    #[error("Range minimum {min} was given without a maximum")]
    MissingMaximum { min: BigUint },
    /// A hash primitive returned a digest of unexpected length.
    #[error("{algorithm} produced {actual} bytes, expected {expected}")]
    HashFailure {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
