//! Ephemeris errors.

use thiserror::Error;

use crate::Body;

/// Errors raised while evaluating a body position.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The requested epoch is NaN or infinite.
    #[error("non-finite epoch: {jd}")]
    NonFiniteEpoch { jd: f64 },
    /// Kepler's equation did not converge for the body's orbit.
    #[error("kepler solver did not converge for {body:?} after {iterations} iterations")]
    NoConvergence { body: Body, iterations: u32 },
    /// The provider does not cover this body or epoch.
    #[error("unsupported query: {0}")]
    Unsupported(String),
}
