//! Flight lifecycle: a ready-made state set and transition table.
//!
//! There is no terminal phase. A flight lands, taxis back to the gate and can
//! start over.

use crate::core::{GuardError, TransitionGuard, TransitionTable};
use crate::{state_enum, transition_table};

state_enum! {
    /// Phases of a single flight.
    pub enum FlightPhase {
        AtGate,
        Taxiing,
        Airborne,
        Climbing,
        Cruising,
        Descending,
        Landing,
        Holding,
    }
}

/// The flight lifecycle table.
///
/// ```text
/// AtGate      -> Taxiing
/// Taxiing     -> AtGate, Holding, Airborne
/// Airborne    -> Climbing
/// Climbing    -> Cruising, Descending
/// Cruising    -> Climbing, Descending
/// Descending  -> Landing
/// Landing     -> Taxiing
/// Holding     -> Taxiing
/// ```
pub fn flight_table() -> TransitionTable<FlightPhase> {
    use FlightPhase::*;

    transition_table! {
        AtGate => [Taxiing],
        Taxiing => [AtGate, Holding, Airborne],
        Airborne => [Climbing],
        Climbing => [Cruising, Descending],
        Cruising => [Climbing, Descending],
        Descending => [Landing],
        Landing => [Taxiing],
        Holding => [Taxiing],
    }
    .expect("Flight table is well-formed")
}

/// A guard over [`flight_table`] starting at `initial`.
pub fn flight_guard(initial: FlightPhase) -> Result<TransitionGuard<FlightPhase>, GuardError> {
    TransitionGuard::new(flight_table(), initial)
}
