use waypoint::builder::TransitionTableBuilder;
use waypoint::core::{GuardError, GuardEvent, GuardEventKind, TransitionGuard};
use waypoint::flight::{flight_guard, flight_table, FlightPhase};
use waypoint::observer::Observer;

use parking_lot::Mutex;
use std::sync::Arc;

use FlightPhase::*;

const ROUND_TRIP: [FlightPhase; 10] = [
    Taxiing, Holding, Taxiing, Airborne, Climbing, Cruising, Descending, Landing, Taxiing, AtGate,
];

#[test]
fn round_trip_returns_to_gate() {
    let mut guard = flight_guard(AtGate).unwrap();

    for phase in ROUND_TRIP {
        guard.request_transition(phase).unwrap();
    }

    assert_eq!(guard.current_state(), &AtGate);

    let history = guard.history();
    assert_eq!(history.len(), 11);
    assert_eq!(history[0], AtGate);
    assert_eq!(&history[1..], &ROUND_TRIP[..]);
    assert_eq!(guard.records().transitions().len(), 10);
}

#[test]
fn gate_cannot_jump_to_airborne() {
    let mut guard = flight_guard(AtGate).unwrap();

    let err = guard.request_transition(Airborne).unwrap_err();

    assert_eq!(
        err,
        GuardError::IllegalTransition {
            current: "AtGate".to_string(),
            target: "Airborne".to_string(),
            allowed: vec!["Taxiing".to_string()],
        }
    );
    assert_eq!(guard.current_state(), &AtGate);
    assert_eq!(guard.history(), vec![AtGate]);
}

#[test]
fn rejected_requests_in_the_middle_do_not_break_the_trip() {
    let mut guard = flight_guard(AtGate).unwrap();

    for phase in ROUND_TRIP {
        // Landing is never reachable in one step from anywhere but Descending
        if *guard.current_state() != Descending {
            assert!(guard.request_transition(Landing).is_err());
        }
        guard.request_transition(phase).unwrap();
    }

    assert_eq!(guard.history().len(), 11);
    assert_eq!(guard.current_state(), &AtGate);
    assert!(guard.rejected_count() > 0);
}

#[test]
fn flight_cycles_indefinitely() {
    let mut guard = flight_guard(AtGate).unwrap();

    for _ in 0..3 {
        for phase in ROUND_TRIP {
            guard.request_transition(phase).unwrap();
        }
    }

    assert_eq!(guard.history().len(), 31);
    assert_eq!(guard.current_state(), &AtGate);
}

#[test]
fn observer_logs_the_flight_path() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);

    let observer = Observer::<GuardEvent<FlightPhase>>::new().on(
        GuardEventKind::Entered,
        move |event: &GuardEvent<FlightPhase>| {
            if let GuardEvent::Entered { to, .. } = event {
                sink.lock().push(*to);
            }
        },
    );

    let mut guard = TransitionGuard::new(flight_table(), AtGate)
        .unwrap()
        .with_observer(observer);

    guard.request_transition(Taxiing).unwrap();
    let _ = guard.request_transition(Cruising);
    guard.request_transition(Airborne).unwrap();

    assert_eq!(*log.lock(), vec![Taxiing, Airborne]);
}

#[test]
fn table_loaded_from_json_drives_a_guard() {
    let json = r#"[
        { "state": "AtGate", "allowed": ["Taxiing"] },
        { "state": "Taxiing", "allowed": ["AtGate"] }
    ]"#;

    let table = TransitionTableBuilder::<FlightPhase>::from_json(json)
        .unwrap()
        .build()
        .unwrap();
    let mut guard = TransitionGuard::new(table, AtGate).unwrap();

    guard.request_transition(Taxiing).unwrap();
    assert!(matches!(
        guard.request_transition(Airborne),
        Err(GuardError::IllegalTransition { .. })
    ));
    assert!(matches!(
        TransitionGuard::new(guard.table().clone(), Holding),
        Err(GuardError::UnknownState { .. })
    ));
}
