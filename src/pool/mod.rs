//! Bounded resource pool.
//!
//! A pool owns a fixed number of interchangeable handles and loans them out
//! one at a time. Handles are never created or destroyed after construction;
//! they only move between `available` and `checked_out`.
//!
//! - [`BoundedResourcePool::checkout`] / [`BoundedResourcePool::return_item`]
//!   for manual loans
//! - [`BoundedResourcePool::lease`] and
//!   [`BoundedResourcePool::scoped_checkout`] for loans that always come back
//! - [`global`] for a single process-wide instance

mod bounded;
mod config;
mod error;
mod event;
pub mod global;
mod handle;
mod lease;

pub use bounded::{BoundedResourcePool, PoolStatus};
pub use config::{PoolConfig, DEFAULT_CAPACITY};
pub use error::{PoolError, ScopedError};
pub use event::{PoolEvent, PoolEventKind};
pub use handle::{HandleId, Ownership, ResourceHandle};
pub use lease::Lease;
