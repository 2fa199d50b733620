//! Comparison of current furniture heights against the recommendation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::heights::{optimal_heights_with, Furniture};
use crate::params::ErgonomicParams;

/// How far a current height is from the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tier {
    /// Within 1 cm of optimal.
    Optimal,
    /// Off by at least 1 cm but less than 2.5 cm.
    Minor,
    /// Off by 2.5 cm or more.
    Major,
}

impl Tier {
    /// Stable status code for the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advice attached to a [`Tier`].
///
/// `Higher` and `Lower` are adjustments to make; `TooHigh` and `TooLow`
/// describe the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// No change needed.
    None,
    /// Raise the furniture.
    Higher,
    /// Lower the furniture.
    Lower,
    /// The furniture is too high.
    TooHigh,
    /// The furniture is too low.
    TooLow,
}

impl Direction {
    /// Stable status code for the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Higher => "higher",
            Self::Lower => "lower",
            Self::TooHigh => "too_high",
            Self::TooLow => "too_low",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison result for a single piece of furniture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionStatus {
    /// Which furniture this describes.
    pub furniture: Furniture,
    /// Current height in centimeters.
    pub current: f64,
    /// Optimal height in centimeters.
    pub optimal: f64,
    /// `current - optimal`.
    pub difference: f64,
    /// Severity of the deviation.
    pub tier: Tier,
    /// Suggested adjustment.
    pub direction: Direction,
}

impl DimensionStatus {
    /// Absolute deviation from optimal.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.difference.abs()
    }

    /// Check if no adjustment is needed.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.tier == Tier::Optimal
    }
}

/// Comparison of a full setup.
///
/// # Example
///
/// ```
/// use ergo_calc::{analyze_setup, Direction, Tier};
///
/// // Optimal for 200 cm is a 45.0 cm chair and a 70.0 cm desk
/// let comparison = analyze_setup(200.0, 46.0, 67.0);
///
/// assert_eq!(comparison.chair.tier, Tier::Minor);
/// assert_eq!(comparison.chair.direction, Direction::Lower);
/// assert_eq!(comparison.desk.tier, Tier::Major);
/// assert_eq!(comparison.desk.direction, Direction::TooLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SetupComparison {
    /// Chair status.
    pub chair: DimensionStatus,
    /// Desk status.
    pub desk: DimensionStatus,
}

impl SetupComparison {
    /// Status for a given piece of furniture.
    #[must_use]
    pub const fn get(&self, furniture: Furniture) -> &DimensionStatus {
        match furniture {
            Furniture::Chair => &self.chair,
            Furniture::Desk => &self.desk,
        }
    }

    /// Check if both chair and desk are optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.chair.is_optimal() && self.desk.is_optimal()
    }

    /// The worse of the two tiers.
    #[must_use]
    pub fn worst_tier(&self) -> Tier {
        self.chair.tier.max(self.desk.tier)
    }
}

/// Classify a deviation with default thresholds.
///
/// Comparisons are strict: exactly 1.0 is [`Tier::Minor`] and exactly 2.5 is
/// [`Tier::Major`].
///
/// # Example
///
/// ```
/// use ergo_calc::{classify, Direction, Tier};
///
/// assert_eq!(classify(0.999), (Tier::Optimal, Direction::None));
/// assert_eq!(classify(1.0), (Tier::Minor, Direction::Lower));
/// assert_eq!(classify(-2.5), (Tier::Major, Direction::TooLow));
/// ```
#[must_use]
pub fn classify(difference: f64) -> (Tier, Direction) {
    classify_with(difference, &ErgonomicParams::default())
}

/// Classify a deviation with custom thresholds.
#[must_use]
pub fn classify_with(difference: f64, params: &ErgonomicParams) -> (Tier, Direction) {
    let magnitude = difference.abs();
    if magnitude < params.optimal_threshold {
        (Tier::Optimal, Direction::None)
    } else if magnitude < params.major_threshold {
        let direction = if difference > 0.0 {
            Direction::Lower
        } else {
            Direction::Higher
        };
        (Tier::Minor, direction)
    } else {
        let direction = if difference > 0.0 {
            Direction::TooHigh
        } else {
            Direction::TooLow
        };
        (Tier::Major, direction)
    }
}

/// Compare current chair and desk heights against the recommendation.
///
/// # Arguments
///
/// * `person_height` - Body height in centimeters
/// * `current_chair` - Current chair height in centimeters
/// * `current_desk` - Current desk height in centimeters
#[must_use]
pub fn analyze_setup(person_height: f64, current_chair: f64, current_desk: f64) -> SetupComparison {
    analyze_setup_with(
        person_height,
        current_chair,
        current_desk,
        &ErgonomicParams::default(),
    )
}

/// Compare current heights against the recommendation with custom parameters.
#[must_use]
pub fn analyze_setup_with(
    person_height: f64,
    current_chair: f64,
    current_desk: f64,
    params: &ErgonomicParams,
) -> SetupComparison {
    let optimal = optimal_heights_with(person_height, params);
    SetupComparison {
        chair: compare(Furniture::Chair, current_chair, optimal.chair_height, params),
        desk: compare(Furniture::Desk, current_desk, optimal.desk_height, params),
    }
}

fn compare(
    furniture: Furniture,
    current: f64,
    optimal: f64,
    params: &ErgonomicParams,
) -> DimensionStatus {
    let difference = current - optimal;
    let (tier, direction) = classify_with(difference, params);
    DimensionStatus {
        furniture,
        current,
        optimal,
        difference,
        tier,
        direction,
    }
}
