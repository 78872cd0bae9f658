//! Transition guard: holds the current state and enforces the table.
//!
//! A guard only moves along edges declared in its [`TransitionTable`]. A
//! request for any other target is rejected with
//! [`GuardError::IllegalTransition`] and changes nothing: not the current
//! state and not the history.

use super::history::{StateHistory, StateTransition};
use super::state::State;
use super::table::TransitionTable;
use crate::observer::{Event, Observer};
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by a [`TransitionGuard`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GuardError {
    #[error("Cannot move from '{current}' to '{target}' (allowed: [{}])", .allowed.join(", "))]
    IllegalTransition {
        current: String,
        target: String,
        allowed: Vec<String>,
    },

    #[error("State '{state}' is not declared in the transition table")]
    UnknownState { state: String },
}

/// Something that happened inside a guard.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardEvent<S: State> {
    /// A transition was accepted and `to` is now current
    Entered { from: S, to: S },
    /// A transition was rejected; `from` is still current
    Rejected { from: S, to: S },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardEventKind {
    Entered,
    Rejected,
}

impl<S: State> Event for GuardEvent<S> {
    type Kind = GuardEventKind;

    fn kind(&self) -> GuardEventKind {
        match self {
            Self::Entered { .. } => GuardEventKind::Entered,
            Self::Rejected { .. } => GuardEventKind::Rejected,
        }
    }
}

/// Table-driven state machine.
///
/// The guard takes `&mut self` for every change. To share one across threads
/// put it behind a mutex so each request runs alone.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{GuardError, TransitionGuard};
/// use waypoint::flight::{flight_table, FlightPhase};
///
/// let mut guard = TransitionGuard::new(flight_table(), FlightPhase::AtGate).unwrap();
///
/// guard.request_transition(FlightPhase::Taxiing).unwrap();
/// assert_eq!(guard.current_state(), &FlightPhase::Taxiing);
///
/// let err = guard.request_transition(FlightPhase::Cruising).unwrap_err();
/// assert!(matches!(err, GuardError::IllegalTransition { .. }));
/// assert_eq!(guard.current_state(), &FlightPhase::Taxiing);
/// assert_eq!(guard.history(), vec![FlightPhase::AtGate, FlightPhase::Taxiing]);
/// ```
#[derive(Debug)]
pub struct TransitionGuard<S: State> {
    table: TransitionTable<S>,
    current: S,
    history: StateHistory<S>,
    rejected: usize,
    observer: Option<Observer<GuardEvent<S>>>,
}

impl<S: State> TransitionGuard<S> {
    /// Create a guard over `table`, starting in `initial`.
    pub fn new(table: TransitionTable<S>, initial: S) -> Result<Self, GuardError> {
        Self::check_declared(&table, &initial)?;
        Ok(Self {
            history: StateHistory::new(initial.clone()),
            current: initial,
            table,
            rejected: 0,
            observer: None,
        })
    }

    /// Attach an observer notified of accepted and rejected transitions.
    pub fn with_observer(mut self, observer: Observer<GuardEvent<S>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Restart the guard in `initial`, discarding the history.
    pub fn initialize(&mut self, initial: S) -> Result<(), GuardError> {
        Self::check_declared(&self.table, &initial)?;
        debug!(state = initial.name(), "Guard initialized");
        self.history = StateHistory::new(initial.clone());
        self.current = initial;
        self.rejected = 0;
        Ok(())
    }

    /// Move to `target` if the table allows it from the current state.
    ///
    /// Returns the new current state. On rejection the guard is unchanged.
    pub fn request_transition(&mut self, target: S) -> Result<&S, GuardError> {
        if !self.can_transition(&target) {
            self.rejected += 1;
            let allowed: Vec<String> = self
                .allowed()
                .iter()
                .map(|s| s.name().to_string())
                .collect();
            warn!(
                from = self.current.name(),
                to = target.name(),
                "Rejected illegal transition"
            );
            self.emit(GuardEvent::Rejected {
                from: self.current.clone(),
                to: target.clone(),
            });
            return Err(GuardError::IllegalTransition {
                current: self.current.name().to_string(),
                target: target.name().to_string(),
                allowed,
            });
        }

        let from = std::mem::replace(&mut self.current, target.clone());
        debug!(from = from.name(), to = target.name(), "Transitioned");
        self.history.push(StateTransition {
            from: from.clone(),
            to: target.clone(),
            timestamp: Utc::now(),
        });
        self.emit(GuardEvent::Entered { from, to: target });

        Ok(&self.current)
    }

    /// Current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Snapshot of every state entered, oldest first.
    pub fn history(&self) -> Vec<S> {
        self.history.path().into_iter().cloned().collect()
    }

    /// Timestamped record of accepted transitions.
    pub fn records(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Whether `target` is reachable in one step from the current state.
    pub fn can_transition(&self, target: &S) -> bool {
        self.table.is_allowed(&self.current, target)
    }

    /// Allowed successors of the current state.
    pub fn allowed(&self) -> &[S] {
        self.table.allowed(&self.current).unwrap_or(&[])
    }

    /// Requests rejected since the last (re)initialization.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    fn emit(&self, event: GuardEvent<S>) {
        if let Some(observer) = &self.observer {
            observer.notify(&event);
        }
    }

    fn check_declared(table: &TransitionTable<S>, state: &S) -> Result<(), GuardError> {
        if table.contains(state) {
            Ok(())
        } else {
            Err(GuardError::UnknownState {
                state: state.name().to_string(),
            })
        }
    }
}
