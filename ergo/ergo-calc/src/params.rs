//! Parameters for ergonomic height calculations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Parameters for height recommendations and setup analysis.
///
/// All lengths are in centimeters.
///
/// # Example
///
/// ```
/// use ergo_calc::ErgonomicParams;
///
/// let params = ErgonomicParams::default();
/// assert!((params.calf_ratio - 0.215).abs() < 1e-10);
/// assert!((params.desk_offset - 25.0).abs() < 1e-10);
///
/// // Taller desks, e.g. for a keyboard tray that sits above the desk surface
/// let custom = ErgonomicParams::default().desk_offset(27.0);
/// assert!((custom.desk_offset - 27.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErgonomicParams {
    /// Calf length as a fraction of body height.
    pub calf_ratio: f64,

    /// Added to calf length for shoe height and comfort.
    pub chair_offset: f64,

    /// Seated elbow height above the chair.
    pub desk_offset: f64,

    /// Half-width of the recommended chair range.
    pub chair_tolerance: f64,

    /// Half-width of the recommended desk range.
    pub desk_tolerance: f64,

    /// Differences strictly below this are optimal.
    pub optimal_threshold: f64,

    /// Differences at or above this are major.
    pub major_threshold: f64,
}

impl Default for ErgonomicParams {
    fn default() -> Self {
        Self {
            calf_ratio: 0.215,
            chair_offset: 2.0,
            desk_offset: 25.0,
            chair_tolerance: 2.0,
            desk_tolerance: 2.5,
            optimal_threshold: 1.0,
            major_threshold: 2.5,
        }
    }
}

impl ErgonomicParams {
    /// Set the calf length ratio.
    #[must_use]
    pub const fn calf_ratio(mut self, ratio: f64) -> Self {
        self.calf_ratio = ratio;
        self
    }

    /// Set the chair comfort offset.
    #[must_use]
    pub const fn chair_offset(mut self, offset: f64) -> Self {
        self.chair_offset = offset;
        self
    }

    /// Set the desk offset above the chair.
    #[must_use]
    pub const fn desk_offset(mut self, offset: f64) -> Self {
        self.desk_offset = offset;
        self
    }

    /// Set the chair and desk range half-widths.
    #[must_use]
    pub const fn tolerances(mut self, chair: f64, desk: f64) -> Self {
        self.chair_tolerance = chair;
        self.desk_tolerance = desk;
        self
    }

    /// Set the optimal and major tier thresholds.
    #[must_use]
    pub const fn thresholds(mut self, optimal: f64, major: f64) -> Self {
        self.optimal_threshold = optimal;
        self.major_threshold = major;
        self
    }

    /// Check that the parameters describe a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidParams`] if any value is not finite, if the
    /// ratio, tolerances or thresholds are not positive, or if the optimal
    /// threshold is not below the major threshold.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("calf_ratio", self.calf_ratio),
            ("chair_offset", self.chair_offset),
            ("desk_offset", self.desk_offset),
            ("chair_tolerance", self.chair_tolerance),
            ("desk_tolerance", self.desk_tolerance),
            ("optimal_threshold", self.optimal_threshold),
            ("major_threshold", self.major_threshold),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CalcError::invalid_params(format!(
                "{name} must be finite, got {value}"
            )));
        }

        let positive = [
            ("calf_ratio", self.calf_ratio),
            ("chair_tolerance", self.chair_tolerance),
            ("desk_tolerance", self.desk_tolerance),
            ("optimal_threshold", self.optimal_threshold),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(CalcError::invalid_params(format!(
                "{name} must be positive, got {value}"
            )));
        }

        if self.optimal_threshold >= self.major_threshold {
            return Err(CalcError::invalid_params(format!(
                "optimal_threshold ({}) must be below major_threshold ({})",
                self.optimal_threshold, self.major_threshold
            )));
        }

        Ok(())
    }
}
