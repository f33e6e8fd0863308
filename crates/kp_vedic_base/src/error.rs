//! Error types for KP calculations.

use kp_time::TimeError;
use thiserror::Error;

/// Errors from KP base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Caller-supplied value is out of range or missing.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The geometry has no defined answer (e.g. Ascendant at a pole).
    #[error("computation degenerate: {0}")]
    ComputationDegenerate(&'static str),
    /// Error from civil time parsing or validation.
    #[error(transparent)]
    Time(#[from] TimeError),
}
