//! Reduction of a point pair to a vertical distance.
//!
//! Only the `y` axis contributes to the height. Horizontal tap error between
//! the two points is reported separately and never changes the reading.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Centimeters per meter.
pub const CM_PER_METER: f64 = 100.0;

/// Height measurement between two picked points.
///
/// # Example
///
/// ```
/// use ergo_measure::measure_height;
/// use nalgebra::Point3;
///
/// let result = measure_height(Point3::origin(), Point3::new(5.0, 0.38, 5.0));
///
/// assert!((result.height - 38.0).abs() < 1e-10);
/// assert!((result.horizontal_offset - 50.0_f64.sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightMeasurement {
    /// Start point in world meters.
    pub from: Point3<f64>,
    /// End point in world meters.
    pub to: Point3<f64>,
    /// Absolute vertical distance, in centimeters unless a custom scale was used.
    pub height: f64,
    /// Discarded horizontal (x/z) displacement in meters.
    pub horizontal_offset: f64,
}

impl HeightMeasurement {
    /// Direction vector from start to end (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.to - self.from
    }

    /// Midpoint between the two points, e.g. for placing a label.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        Point3::from((self.from.coords + self.to.coords) / 2.0)
    }

    /// Check if the end point lies above the start point.
    #[must_use]
    pub fn is_upward(&self) -> bool {
        self.to.y > self.from.y
    }
}

/// Vertical distance between two points in centimeters.
///
/// # Example
///
/// ```
/// use ergo_measure::vertical_distance_cm;
/// use nalgebra::Point3;
///
/// let cm = vertical_distance_cm(Point3::new(0.0, 0.72, 0.0), Point3::origin());
/// assert!((cm - 72.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn vertical_distance_cm(from: Point3<f64>, to: Point3<f64>) -> f64 {
    vertical_distance(from, to, CM_PER_METER)
}

/// Vertical distance between two points, multiplied by `scale`.
#[must_use]
pub fn vertical_distance(from: Point3<f64>, to: Point3<f64>, scale: f64) -> f64 {
    (to.y - from.y).abs() * scale
}

/// Measure the height between two points in centimeters.
#[must_use]
pub fn measure_height(from: Point3<f64>, to: Point3<f64>) -> HeightMeasurement {
    measure_height_scaled(from, to, CM_PER_METER)
}

/// Measure the height between two points with a custom unit scale.
#[must_use]
pub fn measure_height_scaled(from: Point3<f64>, to: Point3<f64>, scale: f64) -> HeightMeasurement {
    let diff = to - from;
    HeightMeasurement {
        from,
        to,
        height: vertical_distance(from, to, scale),
        horizontal_offset: diff.x.hypot(diff.z),
    }
}
