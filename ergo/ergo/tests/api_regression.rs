//! API Regression Tests for the ergo crates
//!
//! These tests pin the public API and the reference values it produces. They
//! are organized in tiers of increasing scope:
//!
//! - Tier 1: Calculator (heights, ranges, tiers)
//! - Tier 2: Measurement (reduction, session state machine, adjustment)
//! - Tier 3: Workflow (measure, apply, compare)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use ergo::prelude::*;
use ergo::{calc, measure};

// =============================================================================
// TIER 1: Calculator
// =============================================================================

mod tier1_calculator {
    use super::*;

    #[test]
    fn reference_heights() {
        let cases = [
            (150.0, 34.3, 59.3),
            (165.0, 37.5, 62.5),
            (170.0, 38.6, 63.6),
            (180.0, 40.7, 65.7),
            (190.0, 42.9, 67.9),
            (200.0, 45.0, 70.0),
        ];
        for (person, chair, desk) in cases {
            let heights = optimal_heights(person);
            assert_relative_eq!(heights.chair_height, chair, epsilon = 1e-10);
            assert_relative_eq!(heights.desk_height, desk, epsilon = 1e-10);
        }
    }

    #[test]
    fn desk_is_chair_plus_offset() {
        for person in [120.0, 155.5, 172.3, 188.8, 210.0] {
            let heights = optimal_heights(person);
            assert!((heights.desk_height - heights.chair_height - 25.0).abs() <= 0.1 + 1e-9);
        }
    }

    #[test]
    fn ranges() {
        let ranges = height_ranges(180.0);
        assert_relative_eq!(ranges.chair.min, 38.7, epsilon = 1e-10);
        assert_relative_eq!(ranges.chair.max, 42.7, epsilon = 1e-10);
        assert_relative_eq!(ranges.desk.min, 63.2, epsilon = 1e-10);
        assert_relative_eq!(ranges.desk.max, 68.2, epsilon = 1e-10);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(calc::classify(1.0).0, Tier::Minor);
        assert_eq!(calc::classify(2.5).0, Tier::Major);
        assert_eq!(calc::classify(0.999).0, Tier::Optimal);
        assert_eq!(calc::classify(-3.0), (Tier::Major, Direction::TooLow));
    }

    #[test]
    fn analyze_setup_reports_all_fields() {
        let comparison = analyze_setup(200.0, 43.5, 72.0);
        let chair = comparison.get(Furniture::Chair);
        assert_relative_eq!(chair.current, 43.5);
        assert_relative_eq!(chair.optimal, 45.0, epsilon = 1e-10);
        assert_relative_eq!(chair.difference, -1.5, epsilon = 1e-10);
        assert_relative_eq!(chair.magnitude(), 1.5, epsilon = 1e-10);
        assert_eq!(chair.tier, Tier::Minor);
        assert_eq!(chair.direction, Direction::Higher);

        assert_eq!(comparison.desk.tier, Tier::Minor);
        assert_eq!(comparison.desk.direction, Direction::Lower);
    }

    #[test]
    fn input_parsing() {
        assert_relative_eq!(parse_height("180").unwrap(), 180.0);
        assert!(matches!(
            parse_height(""),
            Err(calc::CalcError::Unparseable(_))
        ));
    }
}

// =============================================================================
// TIER 2: Measurement
// =============================================================================

mod tier2_measurement {
    use super::*;

    #[test]
    fn vertical_reduction() {
        let a = measure::vertical_distance_cm(Point3::origin(), Point3::new(0.0, 0.38, 0.0));
        let b = measure::vertical_distance_cm(Point3::origin(), Point3::new(5.0, 0.38, 5.0));
        assert_relative_eq!(a, 38.0, epsilon = 1e-10);
        assert_relative_eq!(b, 38.0, epsilon = 1e-10);
    }

    #[test]
    fn session_completes_after_two_picks() {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        assert_eq!(session.state(), MeasurementState::NotStarted);

        session.pick(Some(Point3::origin())).unwrap();
        assert_eq!(session.state(), MeasurementState::WaitingForEndPoint);

        let snapshot = session.pick(Some(Point3::new(0.0, 0.38, 0.0))).unwrap();
        assert_eq!(snapshot.state, MeasurementState::Completed);
        assert_relative_eq!(snapshot.result_cm.unwrap(), 38.0, epsilon = 1e-10);
    }

    #[test]
    fn missed_tap_is_reported() {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        assert_eq!(session.pick(None), Err(MeasureError::NoTargetAcquired));
        assert_eq!(session.state(), MeasurementState::NotStarted);
    }

    #[test]
    fn adjustment_workflow() {
        let mut session = MeasurementSession::new(MeasurementKind::DeskHeight);
        session.pick(Some(Point3::origin())).unwrap();
        session.pick(Some(Point3::new(0.0, 0.70, 0.0))).unwrap();

        let snapshot = session.toggle_adjustment();
        assert!(snapshot.adjusting);

        let snapshot = session.pick(Some(Point3::new(0.0, 0.01, 0.0))).unwrap();
        assert_eq!(snapshot.adjusting_target, AdjustmentTarget::Start);

        let snapshot = session.pick(Some(Point3::new(0.0, -0.02, 0.3))).unwrap();
        assert_eq!(snapshot.adjusting_target, AdjustmentTarget::None);
        assert_relative_eq!(snapshot.result_cm.unwrap(), 72.0, epsilon = 1e-9);

        // Tap away from both markers with nothing selected ends adjustment
        let snapshot = session.pick(Some(Point3::new(1.0, 1.0, 1.0))).unwrap();
        assert!(!snapshot.adjusting);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        session.pick(Some(Point3::origin())).unwrap();
        session.pick(Some(Point3::new(0.0, 0.4, 0.0))).unwrap();
        session.toggle_adjustment();

        let snapshot = session.reset();
        assert_eq!(snapshot.state, MeasurementState::NotStarted);
        assert!(snapshot.start.is_none());
        assert!(snapshot.end.is_none());
        assert!(snapshot.result_cm.is_none());
        assert!(!snapshot.adjusting);
    }

    #[test]
    fn default_params() {
        let params = measure::MeasureParams::default();
        assert_relative_eq!(params.proximity_threshold, 0.05);
        assert_relative_eq!(params.unit_scale, measure::CM_PER_METER);
    }
}

// =============================================================================
// TIER 3: Workflow
// =============================================================================

mod tier3_workflow {
    use super::*;

    #[test]
    fn measure_both_and_compare() {
        let mut setup = FurnitureSetup::new();
        setup.set_person_height(parse_height("180").unwrap());

        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        session.pick(Some(Point3::new(0.0, 0.0, 0.0))).unwrap();
        session.pick(Some(Point3::new(0.0, 0.41, 0.0))).unwrap();
        setup.apply(session.accept().unwrap());

        session.begin(MeasurementKind::DeskHeight);
        session.pick(Some(Point3::new(0.0, 0.0, 0.0))).unwrap();
        session.pick(Some(Point3::new(0.0, 0.62, 0.0))).unwrap();
        setup.apply(session.accept().unwrap());

        let comparison = setup.comparison().unwrap();
        assert_eq!(comparison.chair.tier, Tier::Optimal);
        assert_eq!(comparison.desk.tier, Tier::Major);
        assert_eq!(comparison.desk.direction, Direction::TooLow);
        assert_eq!(comparison.worst_tier(), Tier::Major);
    }

    #[test]
    fn stopped_session_has_nothing_to_accept() {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        session.pick(Some(Point3::origin())).unwrap();
        session.pick(Some(Point3::new(0.0, 0.4, 0.0))).unwrap();
        session.stop();
        assert!(session.accept().is_none());
    }

    #[test]
    fn kind_maps_to_furniture() {
        assert_eq!(ergo::furniture_for(MeasurementKind::ChairHeight), Furniture::Chair);
        assert_eq!(ergo::kind_for(Furniture::Desk), MeasurementKind::DeskHeight);
    }
}

// =============================================================================
// Serialization (feature-gated)
// =============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn snapshot_serializes() {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        session.pick(Some(Point3::origin())).unwrap();
        let snapshot = session.pick(Some(Point3::new(0.0, 0.4, 0.0))).unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("Completed"));
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn params_deserialize() {
        let json = r#"{
            "calf_ratio": 0.22,
            "chair_offset": 2.0,
            "desk_offset": 26.0,
            "chair_tolerance": 2.0,
            "desk_tolerance": 2.5,
            "optimal_threshold": 1.0,
            "major_threshold": 2.5
        }"#;
        let params: ErgonomicParams = serde_json::from_str(json).unwrap();
        assert!(params.validate().is_ok());
        assert_relative_eq!(params.desk_offset, 26.0);
    }
}
