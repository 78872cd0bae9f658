//! Flight Lifecycle
//!
//! This demo walks a flight from the gate, through the air and back.
//!
//! Key concepts:
//! - Table-driven transitions instead of per-state branching
//! - Rejected requests leave state and history untouched
//! - Observers instrument the guard without touching its code
//!
//! Run with: RUST_LOG=debug cargo run --example flight_lifecycle

use tracing_subscriber::EnvFilter;
use waypoint::core::{GuardEvent, GuardEventKind, State, TransitionGuard};
use waypoint::flight::{flight_table, FlightPhase};
use waypoint::observer::Observer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Flight Lifecycle ===\n");

    let observer = Observer::<GuardEvent<FlightPhase>>::new()
        .on(GuardEventKind::Entered, |event: &GuardEvent<FlightPhase>| {
            if let GuardEvent::Entered { from, to } = event {
                println!("  {} => {}", from.name(), to.name());
            }
        })
        .on(GuardEventKind::Rejected, |event: &GuardEvent<FlightPhase>| {
            if let GuardEvent::Rejected { from, to } = event {
                println!("  {} => {} not possible", from.name(), to.name());
            }
        });

    let mut flight75 = TransitionGuard::new(flight_table(), FlightPhase::AtGate)
        .expect("AtGate is part of the flight table")
        .with_observer(observer);

    let requests = [
        FlightPhase::Taxiing,
        FlightPhase::Holding,
        FlightPhase::Taxiing,
        FlightPhase::Airborne,
        FlightPhase::Landing,
        FlightPhase::Climbing,
        FlightPhase::Cruising,
        FlightPhase::Descending,
        FlightPhase::Landing,
        FlightPhase::Taxiing,
        FlightPhase::AtGate,
    ];

    for phase in requests {
        if let Err(err) = flight75.request_transition(phase) {
            println!("    ({err})");
        }
    }

    println!("\nHistory:");
    for phase in flight75.history() {
        println!("  {}", phase.name());
    }

    if let Some(duration) = flight75.records().duration() {
        println!("\nTotal time: {duration:?}");
    }
    println!("Rejected requests: {}", flight75.rejected_count());

    println!("\n=== Demo Complete ===");
}
