//! Adjacency table of legal transitions.

use super::state::State;
use serde::{Deserialize, Serialize};

/// One row of a transition table: a state and the states it may move to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TableEntry<S: State> {
    pub state: S,
    #[serde(default)]
    pub allowed: Vec<S>,
}

/// Validated, immutable table of legal transitions.
///
/// Tables are only produced by [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder)
/// (or the [`transition_table!`](crate::transition_table) macro), which rejects
/// duplicate states, duplicate edges and edges to undeclared states. Once
/// built, a table never changes.
///
/// # Example
///
/// ```rust
/// use waypoint::flight::{flight_table, FlightPhase};
///
/// let table = flight_table();
/// assert!(table.is_allowed(&FlightPhase::AtGate, &FlightPhase::Taxiing));
/// assert!(!table.is_allowed(&FlightPhase::AtGate, &FlightPhase::Airborne));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: State> {
    entries: Vec<TableEntry<S>>,
}

impl<S: State> TransitionTable<S> {
    pub(crate) fn from_entries(entries: Vec<TableEntry<S>>) -> Self {
        Self { entries }
    }

    /// Allowed successors of `state`, or `None` if the state is not declared.
    pub fn allowed(&self, state: &S) -> Option<&[S]> {
        self.entries
            .iter()
            .find(|entry| entry.state == *state)
            .map(|entry| entry.allowed.as_slice())
    }

    /// Whether `from -> to` is a declared edge.
    pub fn is_allowed(&self, from: &S, to: &S) -> bool {
        self.allowed(from)
            .is_some_and(|allowed| allowed.contains(to))
    }

    /// Whether `state` is declared in the table.
    pub fn contains(&self, state: &S) -> bool {
        self.allowed(state).is_some()
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|entry| &entry.state)
    }

    /// Table rows in declaration order.
    pub fn entries(&self) -> &[TableEntry<S>] {
        &self.entries
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of edges across all states.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.allowed.len()).sum()
    }
}
