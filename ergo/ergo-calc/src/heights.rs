//! Optimal chair and desk heights from body height.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::ErgonomicParams;

/// A piece of furniture the calculator gives advice for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Furniture {
    /// Seat height.
    Chair,
    /// Work surface height.
    Desk,
}

impl Furniture {
    /// Stable status code for the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::Desk => "desk",
        }
    }
}

impl fmt::Display for Furniture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended furniture heights in centimeters, rounded to one decimal.
///
/// # Example
///
/// ```
/// use ergo_calc::optimal_heights;
///
/// let heights = optimal_heights(180.0);
/// assert!((heights.chair_height - 40.7).abs() < 1e-10);
/// assert!((heights.desk_height - 65.7).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FurnitureHeights {
    /// Recommended seat height.
    pub chair_height: f64,
    /// Recommended work surface height.
    pub desk_height: f64,
}

impl FurnitureHeights {
    /// Height for a given piece of furniture.
    #[must_use]
    pub const fn get(&self, furniture: Furniture) -> f64 {
        match furniture {
            Furniture::Chair => self.chair_height,
            Furniture::Desk => self.desk_height,
        }
    }
}

/// Round to one decimal place, half away from zero.
///
/// # Example
///
/// ```
/// use ergo_calc::round_to_tenth;
///
/// assert!((round_to_tenth(38.55) - 38.6).abs() < 1e-10);
/// assert!((round_to_tenth(-0.15) + 0.2).abs() < 1e-10);
/// ```
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate optimal furniture heights with default parameters.
///
/// Calf length is estimated as 21.5% of body height. The chair sits 2 cm above
/// that, and the desk sits 25 cm above the unrounded chair height.
///
/// # Arguments
///
/// * `person_height` - Body height in centimeters
///
/// No bounds are enforced. Zero or negative heights give finite, non-physical
/// results.
///
/// # Example
///
/// ```
/// use ergo_calc::optimal_heights;
///
/// let heights = optimal_heights(170.0);
/// assert!((heights.chair_height - 38.6).abs() < 1e-10);
/// assert!((heights.desk_height - 63.6).abs() < 1e-10);
/// ```
#[must_use]
pub fn optimal_heights(person_height: f64) -> FurnitureHeights {
    optimal_heights_with(person_height, &ErgonomicParams::default())
}

/// Calculate optimal furniture heights with custom parameters.
#[must_use]
pub fn optimal_heights_with(person_height: f64, params: &ErgonomicParams) -> FurnitureHeights {
    let calf_length = person_height * params.calf_ratio;
    let chair = calf_length + params.chair_offset;
    // Desk offset goes on the unrounded chair height.
    let desk = chair + params.desk_offset;

    FurnitureHeights {
        chair_height: round_to_tenth(chair),
        desk_height: round_to_tenth(desk),
    }
}
