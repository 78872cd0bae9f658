//! The `State` trait implemented by every state a guard can hold.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state is an immutable identifier. Its legal successors are not part of
/// the state itself; they live in a [`TransitionTable`](super::TransitionTable)
/// so the same state type can be reused with different graphs.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history snapshots
/// - `PartialEq`: transition legality is decided by equality against the table
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: tables are loadable from configuration
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable display name used in errors and log events.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Locked => "Locked",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Door::Open.name(), "Open");
        assert_eq!(Door::Closed.name(), "Closed");
        assert_eq!(Door::Locked.name(), "Locked");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Door::Closed;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Door = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(Door::Open, Door::Open.clone());
        assert_ne!(Door::Open, Door::Locked);
    }
}
