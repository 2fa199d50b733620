//! Ergonomic furniture height toolkit.
//!
//! This umbrella crate re-exports the ergo-* crates and adds the
//! [`FurnitureSetup`] workflow that connects them: measure a chair or desk,
//! apply the measurement, and compare it against the recommendation for the
//! user's body height.
//!
//! # Quick Start
//!
//! ```
//! use ergo::prelude::*;
//!
//! // Recommendation from body height alone
//! let heights = optimal_heights(180.0);
//! assert!((heights.chair_height - 40.7).abs() < 1e-10);
//!
//! // Measure the current chair with two taps
//! let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
//! session.pick(Some(Point3::new(0.0, 0.0, 0.0))).unwrap();
//! session.pick(Some(Point3::new(0.02, 0.46, 0.01))).unwrap();
//!
//! let mut setup = FurnitureSetup::new();
//! setup.set_person_height(180.0);
//! setup.set_current(Furniture::Desk, 65.7);
//! setup.apply(session.accept().unwrap());
//!
//! let comparison = setup.comparison().unwrap();
//! assert_eq!(comparison.chair.direction, Direction::TooHigh);
//! assert!(comparison.desk.is_optimal());
//! ```
//!
//! # Module Organization
//!
//! - [`calc`] - Optimal heights, ranges, setup analysis, input parsing
//! - [`measure`] - Point-pair measurement session and vertical reduction
//! - [`FurnitureSetup`] - Workflow state tying the two together
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` on all value types and snapshots

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod setup;

// =============================================================================
// Re-exports
// =============================================================================

/// Optimal heights, ranges, setup analysis and input parsing.
pub use ergo_calc as calc;

/// Point-pair measurement session and vertical reduction.
pub use ergo_measure as measure;

pub use setup::{furniture_for, kind_for, FurnitureSetup};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for ergonomic setup work.
///
/// # Usage
///
/// ```
/// use ergo::prelude::*;
/// ```
pub mod prelude {
    // Calculator
    pub use ergo_calc::{
        analyze_setup, height_ranges, optimal_heights, parse_height, Direction, ErgonomicParams,
        Furniture, FurnitureHeights, SetupComparison, Tier,
    };

    // Measurement
    pub use ergo_measure::{
        AdjustmentTarget, MeasureError, MeasurementKind, MeasurementSession, MeasurementState,
        Point3, SessionSnapshot,
    };

    // Workflow
    pub use crate::setup::FurnitureSetup;
}
