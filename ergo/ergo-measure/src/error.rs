//! Error types for point-pair measurement.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur while driving a measurement session.
///
/// None of these are fatal. The session is left unchanged and the caller may
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The hit test for a tap found no surface.
    #[error("no target acquired")]
    NoTargetAcquired,

    /// Invalid measurement parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl MeasureError {
    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
