//! Error types for slant.

use thiserror::Error;

/// Errors that can occur during signature and similarity operations.
///
/// Every public operation validates its preconditions eagerly and fails
/// with one of these variants rather than letting NaN or infinity escape
/// into a caller's arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// Non-positive size requested for a projection matrix.
    #[error("invalid projection dimensions {rows}x{cols}: both must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    /// Vector or signature length does not match what the operation expects.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero-magnitude vector passed to angular similarity.
    #[error("zero-magnitude vector: angle is undefined")]
    ZeroVector,
}

pub type Result<T> = std::result::Result<T, SketchError>;
