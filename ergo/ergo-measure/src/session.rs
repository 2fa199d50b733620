//! Two-point measurement session with endpoint adjustment.
//!
//! A [`MeasurementSession`] consumes resolved 3D points from an external
//! hit-test service and reduces them to a vertical distance. Every mutating
//! call returns a [`SessionSnapshot`] for the renderer; calls that make no
//! sense in the current state are ignored rather than rejected.

use nalgebra::Point3;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};
use crate::params::MeasureParams;
use crate::reduction::{measure_height_scaled, vertical_distance, HeightMeasurement};
use crate::state::{AdjustmentTarget, MeasurementKind, MeasurementState};

/// Observable state of a session after a call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionSnapshot {
    /// Workflow state.
    pub state: MeasurementState,
    /// Whether adjustment mode is on.
    pub adjusting: bool,
    /// Marker selected for repositioning.
    pub adjusting_target: AdjustmentTarget,
    /// Vertical distance in centimeters, present once both points are placed.
    pub result_cm: Option<f64>,
    /// Start marker position in world meters.
    pub start: Option<Point3<f64>>,
    /// End marker position in world meters.
    pub end: Option<Point3<f64>>,
    /// What is being measured.
    pub kind: MeasurementKind,
    /// Whether the session is accepting picks.
    pub active: bool,
}

impl SessionSnapshot {
    /// Check if both markers should be connected by a line.
    #[must_use]
    pub const fn has_segment(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// A completed measurement handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcceptedMeasurement {
    /// What was measured.
    pub kind: MeasurementKind,
    /// Measured height in centimeters.
    pub height_cm: f64,
}

/// Stateful two-point height measurement.
///
/// # Example
///
/// ```
/// use ergo_measure::{MeasurementKind, MeasurementSession, MeasurementState};
/// use nalgebra::Point3;
///
/// let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
///
/// session.pick(Some(Point3::origin())).unwrap();
/// let snapshot = session.pick(Some(Point3::new(0.0, 0.45, 0.0))).unwrap();
///
/// assert_eq!(snapshot.state, MeasurementState::Completed);
/// assert!((snapshot.result_cm.unwrap() - 45.0).abs() < 1e-9);
///
/// // A tap that hits nothing is reported without changing the session
/// assert!(session.pick(None).is_err());
/// assert_eq!(session.state(), MeasurementState::Completed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSession {
    params: MeasureParams,
    kind: MeasurementKind,
    active: bool,
    start: Option<Point3<f64>>,
    end: Option<Point3<f64>>,
    state: MeasurementState,
    adjusting: bool,
    target: AdjustmentTarget,
}

impl MeasurementSession {
    /// Create an active session with default parameters.
    #[must_use]
    pub fn new(kind: MeasurementKind) -> Self {
        Self {
            params: MeasureParams::default(),
            kind,
            active: true,
            start: None,
            end: None,
            state: MeasurementState::NotStarted,
            adjusting: false,
            target: AdjustmentTarget::None,
        }
    }

    /// Create an active session with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] if the parameters fail
    /// [`MeasureParams::validate`].
    pub fn with_params(kind: MeasurementKind, params: MeasureParams) -> MeasureResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::new(kind)
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current workflow state.
    #[must_use]
    pub const fn state(&self) -> MeasurementState {
        self.state
    }

    /// Whether adjustment mode is on.
    #[must_use]
    pub const fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    /// Marker selected for repositioning.
    #[must_use]
    pub const fn adjusting_target(&self) -> AdjustmentTarget {
        self.target
    }

    /// Start marker position.
    #[must_use]
    pub const fn start(&self) -> Option<Point3<f64>> {
        self.start
    }

    /// End marker position.
    #[must_use]
    pub const fn end(&self) -> Option<Point3<f64>> {
        self.end
    }

    /// What is being measured.
    #[must_use]
    pub const fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Whether the session accepts picks.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Session parameters.
    #[must_use]
    pub const fn params(&self) -> &MeasureParams {
        &self.params
    }

    /// Vertical distance in centimeters, if both points are placed.
    #[must_use]
    pub fn result_cm(&self) -> Option<f64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(vertical_distance(start, end, self.params.unit_scale)),
            _ => None,
        }
    }

    /// Full measurement details, if both points are placed.
    #[must_use]
    pub fn measurement(&self) -> Option<HeightMeasurement> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                Some(measure_height_scaled(start, end, self.params.unit_scale))
            }
            _ => None,
        }
    }

    /// Current observable state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            adjusting: self.adjusting,
            adjusting_target: self.target,
            result_cm: self.result_cm(),
            start: self.start,
            end: self.end,
            kind: self.kind,
            active: self.active,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start a fresh measurement of the given kind.
    pub fn begin(&mut self, kind: MeasurementKind) -> SessionSnapshot {
        self.clear();
        self.kind = kind;
        self.active = true;
        debug!(kind = %kind, "Measurement started");
        self.snapshot()
    }

    /// Clear both points and return to [`MeasurementState::NotStarted`].
    ///
    /// Safe to call from any state.
    pub fn reset(&mut self) -> SessionSnapshot {
        self.clear();
        debug!("Measurement reset");
        self.snapshot()
    }

    /// Reset and stop accepting picks.
    pub fn stop(&mut self) -> SessionSnapshot {
        self.clear();
        self.active = false;
        debug!("Measurement stopped");
        self.snapshot()
    }

    /// Take the completed measurement for use elsewhere.
    ///
    /// Returns `None` until both points are placed.
    #[must_use]
    pub fn accept(&self) -> Option<AcceptedMeasurement> {
        if !self.state.is_completed() {
            return None;
        }
        self.result_cm().map(|height_cm| AcceptedMeasurement {
            kind: self.kind,
            height_cm,
        })
    }

    fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.state = MeasurementState::NotStarted;
        self.adjusting = false;
        self.target = AdjustmentTarget::None;
    }

    // =========================================================================
    // Picks
    // =========================================================================

    /// Handle the outcome of a hit test for a tap.
    ///
    /// Places the next point while the measurement is in progress, selects or
    /// moves a marker in adjustment mode, and is ignored on a completed
    /// measurement outside adjustment mode.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::NoTargetAcquired`] if `hit` is `None`. The
    /// session is unchanged.
    pub fn pick(&mut self, hit: Option<Point3<f64>>) -> MeasureResult<SessionSnapshot> {
        let Some(point) = hit else {
            warn!(state = %self.state, "No target acquired for tap");
            return Err(MeasureError::NoTargetAcquired);
        };

        if self.state.is_completed() && !self.adjusting {
            debug!("Ignoring pick on completed measurement");
            return Ok(self.snapshot());
        }

        if self.adjusting {
            Ok(self.select_marker(point))
        } else {
            Ok(self.place_point(point))
        }
    }

    /// Place the start or end point.
    ///
    /// Ignored once the measurement is completed or the session is stopped.
    pub fn place_point(&mut self, point: Point3<f64>) -> SessionSnapshot {
        if !self.active {
            debug!("Ignoring point on inactive session");
            return self.snapshot();
        }

        match self.state {
            MeasurementState::NotStarted => {
                self.start = Some(point);
                self.state = MeasurementState::WaitingForEndPoint;
                debug!(y = point.y, "Start point placed");
            }
            MeasurementState::WaitingForEndPoint => {
                self.end = Some(point);
                self.state = MeasurementState::Completed;
                info!(
                    kind = %self.kind,
                    height_cm = self.result_cm().unwrap_or_default(),
                    "Measurement completed"
                );
            }
            MeasurementState::Completed => {
                debug!("Ignoring point on completed measurement");
            }
        }
        self.snapshot()
    }

    // =========================================================================
    // Adjustment
    // =========================================================================

    /// Enter or leave adjustment mode.
    ///
    /// Only has an effect on a completed measurement. Either way the marker
    /// selection is cleared.
    pub fn toggle_adjustment(&mut self) -> SessionSnapshot {
        if !self.state.is_completed() {
            debug!(state = %self.state, "Ignoring adjustment toggle before completion");
            return self.snapshot();
        }
        self.adjusting = !self.adjusting;
        self.target = AdjustmentTarget::None;
        debug!(adjusting = self.adjusting, "Adjustment mode toggled");
        self.snapshot()
    }

    /// Handle a pick in adjustment mode.
    ///
    /// A pick near the start marker selects it, then a pick near the end marker
    /// selects that. Any other pick moves the selected marker there and clears
    /// the selection. Without a selection it leaves adjustment mode.
    pub fn select_marker(&mut self, point: Point3<f64>) -> SessionSnapshot {
        if !self.adjusting || !self.state.is_completed() {
            debug!("Ignoring marker selection outside adjustment mode");
            return self.snapshot();
        }

        if self.is_near(self.start, point) {
            self.target = AdjustmentTarget::Start;
            debug!("Start marker selected");
        } else if self.is_near(self.end, point) {
            self.target = AdjustmentTarget::End;
            debug!("End marker selected");
        } else {
            match self.target {
                AdjustmentTarget::None => {
                    self.adjusting = false;
                    debug!("Pick missed both markers, leaving adjustment mode");
                }
                target => self.move_marker(target, point),
            }
        }
        self.snapshot()
    }

    fn move_marker(&mut self, target: AdjustmentTarget, point: Point3<f64>) {
        match target {
            AdjustmentTarget::Start => self.start = Some(point),
            AdjustmentTarget::End => self.end = Some(point),
            AdjustmentTarget::None => return,
        }
        self.target = AdjustmentTarget::None;
        info!(
            target = ?target,
            height_cm = self.result_cm().unwrap_or_default(),
            "Marker moved"
        );
    }

    fn is_near(&self, marker: Option<Point3<f64>>, point: Point3<f64>) -> bool {
        marker.is_some_and(|m| (m - point).norm() < self.params.proximity_threshold)
    }
}
