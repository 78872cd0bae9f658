//! Builder API for transition tables.
//!
//! This module provides a fluent builder and macros for declaring states and
//! their legal transitions, validated before a guard ever sees them.

pub mod error;
pub mod macros;
pub mod table;

pub use error::{BuildError, TableViolation};
pub use table::TransitionTableBuilder;

use crate::core::{State, TransitionTable};

/// Build a table where each state may only move to the next one in `states`,
/// and the last wraps around to the first.
///
/// # Example
///
/// ```
/// use waypoint::builder::cycle;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// let table = cycle(Light::ALL.to_vec()).unwrap();
/// assert!(table.is_allowed(&Light::Yellow, &Light::Red));
/// assert!(!table.is_allowed(&Light::Red, &Light::Yellow));
/// ```
pub fn cycle<S: State>(states: Vec<S>) -> Result<TransitionTable<S>, BuildError> {
    let successors = states.iter().skip(1).chain(states.first()).cloned();
    let mut builder = TransitionTableBuilder::new();
    for (state, next) in states.iter().cloned().zip(successors) {
        builder = builder.state(state, [next]);
    }
    builder.build()
}
