//! Measurement workflow states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progress of a two-point measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementState {
    /// No point placed yet.
    #[default]
    NotStarted,
    /// Start point placed, waiting for the end point.
    WaitingForEndPoint,
    /// Both points placed; a result is available.
    Completed,
}

impl MeasurementState {
    /// Stable status code for the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::WaitingForEndPoint => "waiting_for_end_point",
            Self::Completed => "completed",
        }
    }

    /// Check if the measurement has a result.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for MeasurementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint selected for repositioning in adjustment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdjustmentTarget {
    /// Nothing selected.
    #[default]
    None,
    /// The start marker.
    Start,
    /// The end marker.
    End,
}

impl AdjustmentTarget {
    /// Check if a marker is selected.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// What the measured height will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementKind {
    /// Floor to seat.
    #[default]
    ChairHeight,
    /// Floor to desk surface.
    DeskHeight,
}

impl MeasurementKind {
    /// Stable status code for the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChairHeight => "chair_height",
            Self::DeskHeight => "desk_height",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
