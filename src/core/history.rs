//! History of states entered by a guard.
//!
//! Only accepted transitions are recorded. A rejected request leaves the
//! history exactly as it was.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateTransition;
/// use waypoint::flight::FlightPhase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: FlightPhase::AtGate,
///     to: FlightPhase::Taxiing,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, FlightPhase::Taxiing);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition was accepted
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the states a guard has entered.
///
/// The history always starts with the initial state. `record` returns a new
/// history with the transition appended and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateHistory, StateTransition};
/// use waypoint::flight::FlightPhase;
/// use chrono::Utc;
///
/// let history = StateHistory::new(FlightPhase::AtGate);
/// let history = history.record(StateTransition {
///     from: FlightPhase::AtGate,
///     to: FlightPhase::Taxiing,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&FlightPhase::AtGate, &FlightPhase::Taxiing]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    initial: S,
    started_at: DateTime<Utc>,
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> StateHistory<S> {
    /// Create a history seeded with the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            started_at: Utc::now(),
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self {
            initial: self.initial.clone(),
            started_at: self.started_at,
            transitions,
        }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// The state the history was seeded with.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Every state entered, oldest first: the initial state followed by the
    /// `to` state of each recorded transition.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Number of states entered, including the initial one.
    pub fn len(&self) -> usize {
        1 + self.transitions.len()
    }

    /// Always false: a history holds at least its initial state.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Time elapsed between seeding and the last accepted transition.
    ///
    /// Returns `None` while no transition has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(self.started_at)
            .to_std()
            .ok()
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
