//! Property-based tests for the measurement session.
//!
//! Run with: cargo test -p ergo-measure -- proptest

#![allow(clippy::unwrap_used)]

use ergo_measure::{
    AdjustmentTarget, MeasurementKind, MeasurementSession, MeasurementState, Point3,
};
use proptest::prelude::*;

/// A world-space point within a few meters of the origin.
fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-3.0..3.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Operations a user can drive a session with.
#[derive(Debug, Clone)]
enum Op {
    Pick(Option<Point3<f64>>),
    Toggle,
    Select(Point3<f64>),
    Reset,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::option::weighted(0.9, arb_point()).prop_map(Op::Pick),
        1 => Just(Op::Toggle),
        2 => arb_point().prop_map(Op::Select),
        1 => Just(Op::Reset),
    ]
}

fn apply(session: &mut MeasurementSession, op: &Op) {
    match op {
        Op::Pick(hit) => {
            let _ = session.pick(*hit);
        }
        Op::Toggle => {
            session.toggle_adjustment();
        }
        Op::Select(p) => {
            session.select_marker(*p);
        }
        Op::Reset => {
            session.reset();
        }
    }
}

proptest! {
    #[test]
    fn proptest_horizontal_invariance(
        start in arb_point(),
        y in -3.0..3.0f64,
        dx in -5.0..5.0f64,
        dz in -5.0..5.0f64,
    ) {
        let mut straight = MeasurementSession::new(MeasurementKind::ChairHeight);
        straight.place_point(start);
        straight.place_point(Point3::new(start.x, y, start.z));

        let mut offset = MeasurementSession::new(MeasurementKind::ChairHeight);
        offset.place_point(start);
        offset.place_point(Point3::new(start.x + dx, y, start.z + dz));

        let a = straight.result_cm().unwrap();
        let b = offset.result_cm().unwrap();
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn proptest_invariants_hold(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        for op in &ops {
            apply(&mut session, op);
            let snapshot = session.snapshot();

            prop_assert!(snapshot.end.is_none() || snapshot.start.is_some());
            if snapshot.adjusting_target != AdjustmentTarget::None {
                prop_assert!(snapshot.adjusting);
            }
            if snapshot.adjusting {
                prop_assert_eq!(snapshot.state, MeasurementState::Completed);
            }
            match (snapshot.start, snapshot.end) {
                (Some(s), Some(e)) => {
                    let expected = (e.y - s.y).abs() * 100.0;
                    let actual = snapshot.result_cm.unwrap();
                    prop_assert!((expected - actual).abs() < 1e-9);
                    prop_assert_eq!(snapshot.state, MeasurementState::Completed);
                }
                _ => prop_assert!(snapshot.result_cm.is_none()),
            }
        }
    }

    #[test]
    fn proptest_reset_from_any_state(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut session = MeasurementSession::new(MeasurementKind::DeskHeight);
        for op in &ops {
            apply(&mut session, op);
        }
        let snapshot = session.reset();
        prop_assert_eq!(snapshot.state, MeasurementState::NotStarted);
        prop_assert!(snapshot.start.is_none());
        prop_assert!(snapshot.end.is_none());
        prop_assert!(snapshot.result_cm.is_none());
        prop_assert!(!snapshot.adjusting);
    }

    #[test]
    fn proptest_missed_pick_changes_nothing(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut session = MeasurementSession::new(MeasurementKind::ChairHeight);
        for op in &ops {
            apply(&mut session, op);
        }
        let before = session.snapshot();
        prop_assert!(session.pick(None).is_err());
        prop_assert_eq!(session.snapshot(), before);
    }
}
