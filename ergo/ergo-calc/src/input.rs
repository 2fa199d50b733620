//! Text input handling for height fields.

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Parse a height typed by the user.
///
/// Surrounding whitespace is ignored and a single decimal comma is accepted.
/// The result is not range-checked.
///
/// # Errors
///
/// Returns [`CalcError::Unparseable`] for empty or non-numeric text and
/// [`CalcError::NonFinite`] for `NaN` or infinite values.
///
/// # Example
///
/// ```
/// use ergo_calc::parse_height;
///
/// assert!((parse_height(" 175.5 ").unwrap() - 175.5).abs() < 1e-10);
/// assert!((parse_height("175,5").unwrap() - 175.5).abs() < 1e-10);
/// assert!(parse_height("tall").is_err());
/// ```
pub fn parse_height(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::unparseable(text));
    }

    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_owned()
    };

    let value: f64 = normalized.parse().map_err(|_| {
        debug!(input = text, "Rejected height input");
        CalcError::unparseable(text)
    })?;

    if !value.is_finite() {
        return Err(CalcError::NonFinite(value));
    }

    Ok(value)
}
