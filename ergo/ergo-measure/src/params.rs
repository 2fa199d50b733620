//! Parameters for point-pair measurement.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// Parameters for a [`MeasurementSession`](crate::MeasurementSession).
///
/// # Example
///
/// ```
/// use ergo_measure::MeasureParams;
///
/// let params = MeasureParams::default();
/// assert!((params.proximity_threshold - 0.05).abs() < 1e-10);
/// assert!((params.unit_scale - 100.0).abs() < 1e-10);
///
/// let loose = MeasureParams::default().proximity_threshold(0.08);
/// assert!(loose.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasureParams {
    /// Radius in meters around a marker that selects it in adjustment mode.
    /// Picks strictly closer than this count as hits.
    pub proximity_threshold: f64,

    /// Factor from world units to reported units (meters to centimeters).
    pub unit_scale: f64,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            proximity_threshold: 0.05, // 5 cm
            unit_scale: 100.0,
        }
    }
}

impl MeasureParams {
    /// Set the marker proximity threshold.
    #[must_use]
    pub const fn proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Set the unit scale.
    #[must_use]
    pub const fn unit_scale(mut self, scale: f64) -> Self {
        self.unit_scale = scale;
        self
    }

    /// Check that both values are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] naming the offending field.
    pub fn validate(&self) -> MeasureResult<()> {
        for (name, value) in [
            ("proximity_threshold", self.proximity_threshold),
            ("unit_scale", self.unit_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeasureError::invalid_params(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
