//! Furniture setup workflow linking measurement and recommendation.
//!
//! A [`FurnitureSetup`] collects the values a user enters or measures, and
//! produces recommendations once enough of them are known.

use ergo_calc::{
    analyze_setup_with, height_ranges_with, optimal_heights_with, ErgonomicParams, Furniture,
    FurnitureHeights, HeightRanges, SetupComparison,
};
use ergo_measure::{AcceptedMeasurement, MeasurementKind};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Furniture a measurement kind refers to.
///
/// # Example
///
/// ```
/// use ergo::{calc::Furniture, furniture_for, measure::MeasurementKind};
///
/// assert_eq!(furniture_for(MeasurementKind::DeskHeight), Furniture::Desk);
/// ```
#[must_use]
pub const fn furniture_for(kind: MeasurementKind) -> Furniture {
    match kind {
        MeasurementKind::ChairHeight => Furniture::Chair,
        MeasurementKind::DeskHeight => Furniture::Desk,
    }
}

/// Measurement kind that captures a piece of furniture.
#[must_use]
pub const fn kind_for(furniture: Furniture) -> MeasurementKind {
    match furniture {
        Furniture::Chair => MeasurementKind::ChairHeight,
        Furniture::Desk => MeasurementKind::DeskHeight,
    }
}

/// Body height and current furniture heights for one user.
///
/// # Example
///
/// ```
/// use ergo::prelude::*;
///
/// let mut setup = FurnitureSetup::new();
/// setup.set_person_height(200.0);
/// setup.set_current(Furniture::Chair, 45.5);
/// assert!(setup.comparison().is_none()); // desk still unknown
///
/// let mut session = MeasurementSession::new(MeasurementKind::DeskHeight);
/// session.pick(Some(Point3::new(0.0, 0.0, 0.0))).unwrap();
/// session.pick(Some(Point3::new(0.0, 0.67, 0.0))).unwrap();
/// setup.apply(session.accept().unwrap());
///
/// let comparison = setup.comparison().unwrap();
/// assert_eq!(comparison.chair.tier, Tier::Optimal);
/// assert_eq!(comparison.desk.direction, Direction::TooLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FurnitureSetup {
    /// Body height in centimeters.
    pub person_height: Option<f64>,
    /// Current chair height in centimeters.
    pub current_chair: Option<f64>,
    /// Current desk height in centimeters.
    pub current_desk: Option<f64>,
    /// Calculator parameters.
    pub params: ErgonomicParams,
}

impl FurnitureSetup {
    /// Create an empty setup with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty setup with custom parameters.
    #[must_use]
    pub fn with_params(params: ErgonomicParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Set the body height.
    pub fn set_person_height(&mut self, height: f64) {
        self.person_height = Some(height);
    }

    /// Set a current furniture height.
    pub fn set_current(&mut self, furniture: Furniture, height: f64) {
        match furniture {
            Furniture::Chair => self.current_chair = Some(height),
            Furniture::Desk => self.current_desk = Some(height),
        }
    }

    /// Current height of a piece of furniture, if known.
    #[must_use]
    pub const fn current(&self, furniture: Furniture) -> Option<f64> {
        match furniture {
            Furniture::Chair => self.current_chair,
            Furniture::Desk => self.current_desk,
        }
    }

    /// Clear a current furniture height.
    pub fn clear_current(&mut self, furniture: Furniture) {
        match furniture {
            Furniture::Chair => self.current_chair = None,
            Furniture::Desk => self.current_desk = None,
        }
    }

    /// Use a measured height as the current height of its furniture.
    pub fn apply(&mut self, measurement: AcceptedMeasurement) {
        let furniture = furniture_for(measurement.kind);
        debug!(
            furniture = %furniture,
            height_cm = measurement.height_cm,
            "Applying measured height"
        );
        self.set_current(furniture, measurement.height_cm);
    }

    /// Recommended heights, once the body height is known.
    #[must_use]
    pub fn recommendation(&self) -> Option<FurnitureHeights> {
        self.person_height
            .map(|h| optimal_heights_with(h, &self.params))
    }

    /// Recommended ranges, once the body height is known.
    #[must_use]
    pub fn ranges(&self) -> Option<HeightRanges> {
        self.person_height.map(|h| height_ranges_with(h, &self.params))
    }

    /// Comparison of the current setup, once all three heights are known.
    #[must_use]
    pub fn comparison(&self) -> Option<SetupComparison> {
        let person = self.person_height?;
        let chair = self.current_chair?;
        let desk = self.current_desk?;
        Some(analyze_setup_with(person, chair, desk, &self.params))
    }
}
