//! Waypoint: table-driven state machines and bounded resource pools.
//!
//! Two small, independent components:
//!
//! - **TransitionGuard**: holds a current state and only moves along edges
//!   declared in a validated [`TransitionTable`]. Rejected requests change
//!   nothing, and the history records only the states actually entered.
//! - **BoundedResourcePool**: loans out a fixed number of handles, fails fast
//!   when exhausted, refuses double returns, and offers scoped checkouts that
//!   always give the handle back.
//!
//! Both can report what happens to a typed [`Observer`].
//!
//! # Core Concepts
//!
//! - **State**: any enum implementing [`State`], usually via [`state_enum!`]
//! - **Table**: the adjacency relation, built with
//!   [`TransitionTableBuilder`](builder::TransitionTableBuilder) or
//!   [`transition_table!`]
//! - **Pool**: [`BoundedResourcePool`] plus the optional process-wide
//!   instance in [`pool::global`]
//!
//! # Example
//!
//! ```rust
//! use waypoint::flight::{flight_guard, FlightPhase};
//! use waypoint::pool::{BoundedResourcePool, PoolConfig};
//!
//! let mut flight = flight_guard(FlightPhase::AtGate).unwrap();
//! flight.request_transition(FlightPhase::Taxiing).unwrap();
//! assert!(flight.request_transition(FlightPhase::Cruising).is_err());
//! assert_eq!(flight.history().len(), 2);
//!
//! let pool = BoundedResourcePool::new(PoolConfig::default()).unwrap();
//! let id = pool
//!     .scoped_checkout(|handle| Ok::<_, std::convert::Infallible>(handle.id()))
//!     .unwrap();
//! assert!(pool.status().available.contains(&id));
//! ```

pub mod builder;
pub mod core;
pub mod flight;
pub mod observer;
pub mod pool;

// Re-export commonly used types
pub use crate::core::{GuardError, State, StateHistory, TransitionGuard, TransitionTable};
pub use observer::{Event, Observer};
pub use pool::{BoundedResourcePool, PoolConfig, PoolError, ResourceHandle};
