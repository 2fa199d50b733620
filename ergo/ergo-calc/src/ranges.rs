//! Recommended height ranges around the optimum.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::heights::{optimal_heights_with, Furniture};
use crate::params::ErgonomicParams;

/// A closed recommended range in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightRange {
    /// Lowest recommended height.
    pub min: f64,
    /// Optimal height.
    pub optimal: f64,
    /// Highest recommended height.
    pub max: f64,
}

impl HeightRange {
    /// Create a range centered on `optimal`.
    #[must_use]
    pub fn around(optimal: f64, tolerance: f64) -> Self {
        Self {
            min: optimal - tolerance,
            optimal,
            max: optimal + tolerance,
        }
    }

    /// Check if a height lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, height: f64) -> bool {
        height >= self.min && height <= self.max
    }

    /// Width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Recommended ranges for chair and desk.
///
/// # Example
///
/// ```
/// use ergo_calc::height_ranges;
///
/// let ranges = height_ranges(180.0);
/// assert!((ranges.chair.min - 38.7).abs() < 1e-10);
/// assert!((ranges.chair.max - 42.7).abs() < 1e-10);
/// assert!((ranges.desk.min - 63.2).abs() < 1e-10);
/// assert!((ranges.desk.max - 68.2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightRanges {
    /// Chair range (optimal ± 2 cm by default).
    pub chair: HeightRange,
    /// Desk range (optimal ± 2.5 cm by default).
    pub desk: HeightRange,
}

impl HeightRanges {
    /// Range for a given piece of furniture.
    #[must_use]
    pub const fn get(&self, furniture: Furniture) -> &HeightRange {
        match furniture {
            Furniture::Chair => &self.chair,
            Furniture::Desk => &self.desk,
        }
    }
}

/// Recommended ranges with default parameters.
#[must_use]
pub fn height_ranges(person_height: f64) -> HeightRanges {
    height_ranges_with(person_height, &ErgonomicParams::default())
}

/// Recommended ranges with custom parameters.
#[must_use]
pub fn height_ranges_with(person_height: f64, params: &ErgonomicParams) -> HeightRanges {
    let optimal = optimal_heights_with(person_height, params);
    HeightRanges {
        chair: HeightRange::around(optimal.chair_height, params.chair_tolerance),
        desk: HeightRange::around(optimal.desk_height, params.desk_tolerance),
    }
}
