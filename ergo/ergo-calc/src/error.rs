//! Error types for height calculations.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while preparing calculator input.
///
/// The calculations never fail on their own. These errors come from
/// [`parse_height`](crate::parse_height) and
/// [`ErgonomicParams::validate`](crate::ErgonomicParams::validate), which
/// callers run before invoking the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Text could not be parsed as a number.
    #[error("unparseable height: {0:?}")]
    Unparseable(String),

    /// Parsed value is `NaN` or infinite.
    #[error("height must be finite, got {0}")]
    NonFinite(f64),

    /// Invalid calculator parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl CalcError {
    /// Create an unparseable input error.
    #[must_use]
    pub fn unparseable(input: impl Into<String>) -> Self {
        Self::Unparseable(input.into())
    }

    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
