//! Pool error types.

use super::config::PoolConfig;
use super::handle::HandleId;
use thiserror::Error;

/// Errors reported by a [`BoundedResourcePool`](super::BoundedResourcePool).
#[derive(Debug, Error)]
pub enum PoolError {
    /// Every handle is checked out
    #[error("Pool '{pool}' exhausted: all {capacity} resources are checked out")]
    PoolExhausted { pool: String, capacity: usize },

    /// The handle is not currently checked out from this pool
    #[error("Handle {handle} is not checked out from pool '{pool}'")]
    InvalidReturn { pool: String, handle: HandleId },

    /// Pools must hold at least one resource
    #[error("Pool capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    /// The process-wide pool exists with a different configuration
    #[error(
        "Global pool already installed as '{}' (capacity {}), cannot install '{}' (capacity {})",
        .installed.name, .installed.capacity, .requested.name, .requested.capacity
    )]
    ConflictingInstall {
        installed: PoolConfig,
        requested: PoolConfig,
    },

    /// Pool configuration could not be parsed
    #[error("Invalid pool configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure of a scoped unit of work.
///
/// `Pool` means no handle could be checked out (or returned); `Work` carries
/// the error reported by the caller's closure.
#[derive(Debug, Error)]
pub enum ScopedError<E> {
    #[error(transparent)]
    Pool(PoolError),

    #[error("Scoped work failed: {0}")]
    Work(E),
}
