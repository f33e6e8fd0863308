//! Error types for civil time parsing and validation.

use thiserror::Error;

/// Errors from parsing or validating civil date/time input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string does not match the expected layout.
    #[error("invalid {what} `{input}`: expected {expected}")]
    InvalidFormat {
        what: &'static str,
        input: String,
        expected: &'static str,
    },
    /// A calendar or clock field is outside its valid range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
