//! Two-point vertical height measurement.
//!
//! This crate turns a pair of world-space points, picked by the user through an
//! external hit-test service, into a furniture height. Either endpoint can be
//! re-picked after completion without restarting.
//!
//! # Features
//!
//! - **Vertical reduction**: Only the `y` axis counts; horizontal tap error is discarded
//! - **Session state machine**: `NotStarted → WaitingForEndPoint → Completed`
//! - **Adjustment mode**: Select a marker within 5 cm and move it
//! - **Snapshots**: Every mutating call returns the full observable state
//!
//! # Layer 0 Crate
//!
//! This crate never talks to tracking or rendering APIs. It only consumes
//! `Option<Point3<f64>>` per tap, where `None` means the tap hit nothing.
//!
//! # Example
//!
//! ```
//! use ergo_measure::{AdjustmentTarget, MeasurementKind, MeasurementSession};
//! use nalgebra::Point3;
//!
//! let mut session = MeasurementSession::new(MeasurementKind::DeskHeight);
//! session.pick(Some(Point3::new(0.0, 0.0, 0.0))).unwrap();
//! session.pick(Some(Point3::new(0.1, 0.70, 0.0))).unwrap();
//!
//! // Move the top marker up by 2 cm
//! session.toggle_adjustment();
//! let selected = session.pick(Some(Point3::new(0.1, 0.70, 0.0))).unwrap();
//! assert_eq!(selected.adjusting_target, AdjustmentTarget::End);
//! let moved = session.pick(Some(Point3::new(0.0, 0.72, 0.5))).unwrap();
//!
//! assert!((moved.result_cm.unwrap() - 72.0).abs() < 1e-9);
//! ```
//!
//! # Coordinate System
//!
//! Points are in world meters with `y` up, as delivered by typical AR tracking
//! frameworks. Results are reported in centimeters.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod params;
mod reduction;
mod session;
mod state;

pub use error::{MeasureError, MeasureResult};
pub use params::MeasureParams;
pub use reduction::{
    measure_height, measure_height_scaled, vertical_distance, vertical_distance_cm,
    HeightMeasurement, CM_PER_METER,
};
pub use session::{AcceptedMeasurement, MeasurementSession, SessionSnapshot};
pub use state::{AdjustmentTarget, MeasurementKind, MeasurementState};

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
