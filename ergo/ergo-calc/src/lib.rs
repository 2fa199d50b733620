//! Ergonomic furniture height recommendations.
//!
//! This crate maps a person's body height to recommended chair and desk
//! heights, and compares a current setup against that recommendation.
//!
//! # Features
//!
//! - **Optimal heights**: Chair and desk heights rounded to 0.1 cm
//! - **Ranges**: Fixed tolerance bands around the optimum
//! - **Setup analysis**: Three-tier status with adjustment advice per dimension
//! - **Input parsing**: Validation of user-typed heights before calculation
//!
//! # Layer 0 Crate
//!
//! This crate has no UI or platform dependencies. All operations are pure
//! functions over `f64` centimeters.
//!
//! # Example
//!
//! ```
//! use ergo_calc::{analyze_setup, optimal_heights, Tier};
//!
//! let heights = optimal_heights(180.0);
//! assert!((heights.chair_height - 40.7).abs() < 1e-10);
//! assert!((heights.desk_height - 65.7).abs() < 1e-10);
//!
//! let comparison = analyze_setup(180.0, 44.0, 66.0);
//! assert_eq!(comparison.chair.tier, Tier::Major);
//! assert_eq!(comparison.desk.tier, Tier::Optimal);
//! ```
//!
//! # Model
//!
//! Calf length is estimated as 21.5% of body height. The chair height is calf
//! length plus 2 cm, and the desk height is the unrounded chair height plus
//! 25 cm. See [`ErgonomicParams`] to change these constants.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analysis;
mod error;
mod heights;
mod input;
mod params;
mod ranges;

pub use analysis::{
    analyze_setup, analyze_setup_with, classify, classify_with, Direction, DimensionStatus,
    SetupComparison, Tier,
};
pub use error::{CalcError, CalcResult};
pub use heights::{optimal_heights, optimal_heights_with, round_to_tenth, Furniture, FurnitureHeights};
pub use input::parse_height;
pub use params::ErgonomicParams;
pub use ranges::{height_ranges, height_ranges_with, HeightRange, HeightRanges};
