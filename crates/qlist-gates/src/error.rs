//! Error types for the gate algebra.

use thiserror::Error;

/// Errors that can occur when building gate matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Axis selector outside `{x, y, z}` (or `{1, 2, 3}`).
    #[error("Invalid rotation axis '{0}', expected one of x, y, z (or 1, 2, 3)")]
    InvalidAxis(String),
}

/// Result type for gate algebra operations.
pub type GateResult<T> = Result<T, GateError>;
