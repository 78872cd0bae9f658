//! Core state machine types.
//!
//! - States via the `State` trait
//! - Validated adjacency tables of legal transitions
//! - The `TransitionGuard` that enforces a table
//! - Immutable history of accepted transitions

mod guard;
mod history;
mod state;
mod table;

pub use guard::{GuardError, GuardEvent, GuardEventKind, TransitionGuard};
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use table::{TableEntry, TransitionTable};
