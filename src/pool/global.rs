//! Process-wide pool instance.
//!
//! The instance is constructed once, by an explicit [`install`] call, and
//! lives for the rest of the process. Nothing constructs it implicitly:
//! [`global`] returns `None` until `install` has run. Passing a pool by
//! reference remains the preferred way to share one; this module is for
//! callers that cannot thread a reference through.

use super::bounded::BoundedResourcePool;
use super::config::PoolConfig;
use super::error::PoolError;
use super::event::PoolEvent;
use crate::observer::Observer;
use std::sync::OnceLock;
use tracing::info;

static GLOBAL_POOL: OnceLock<BoundedResourcePool> = OnceLock::new();

/// Install the process-wide pool, or fetch it if already installed.
///
/// A repeated call with an equal configuration returns the existing pool. A
/// call with a different configuration fails with
/// [`PoolError::ConflictingInstall`].
pub fn install(config: PoolConfig) -> Result<&'static BoundedResourcePool, PoolError> {
    install_with_observer(config, Observer::new())
}

/// Like [`install`], attaching `observer` if this call creates the pool.
///
/// The observer is dropped when the pool already exists.
pub fn install_with_observer(
    config: PoolConfig,
    observer: Observer<PoolEvent>,
) -> Result<&'static BoundedResourcePool, PoolError> {
    config.validate()?;

    let mut created = false;
    let pool = GLOBAL_POOL.get_or_init(|| {
        created = true;
        BoundedResourcePool::assemble(config.clone(), observer)
    });

    if created {
        info!(pool = %config.name, capacity = config.capacity, "Installed global pool");
        return Ok(pool);
    }

    if *pool.config() == config {
        Ok(pool)
    } else {
        Err(PoolError::ConflictingInstall {
            installed: pool.config().clone(),
            requested: config,
        })
    }
}

/// The process-wide pool, if [`install`] has run.
pub fn global() -> Option<&'static BoundedResourcePool> {
    GLOBAL_POOL.get()
}
