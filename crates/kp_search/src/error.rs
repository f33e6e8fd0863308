//! Error type for the orchestration layer.

use kp_core::EphemerisError;
use kp_time::TimeError;
use kp_vedic_base::VedicError;
use thiserror::Error;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    ComputationDegenerate,
}

/// Errors from chart, dasha and horary entry points.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Request field missing, malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A search finished without a match.
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("ephemeris failure: {0}")]
    Ephemeris(#[from] EphemerisError),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::Time(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Vedic(VedicError::InvalidInput(_) | VedicError::Time(_)) => {
                ErrorKind::InvalidInput
            }
            Self::Vedic(_) | Self::Ephemeris(_) => ErrorKind::ComputationDegenerate,
        }
    }
}
