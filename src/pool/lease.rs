//! RAII lease over a checked-out handle.

use super::bounded::BoundedResourcePool;
use super::error::PoolError;
use super::handle::ResourceHandle;
use std::ops::Deref;
use tracing::warn;

/// A checked-out handle that goes back to its pool when dropped.
///
/// Dropping is the unconditional path, including unwinding from a panic.
/// [`Lease::release`] returns the handle early and reports failures;
/// [`Lease::detach`] keeps the handle checked out and hands it to the caller.
///
/// # Example
///
/// ```rust
/// use waypoint::pool::{BoundedResourcePool, PoolConfig};
///
/// let pool = BoundedResourcePool::new(PoolConfig::default()).unwrap();
/// {
///     let lease = pool.lease().unwrap();
///     assert_eq!(pool.checked_out_count(), 1);
///     println!("working with {}", lease.id());
/// }
/// assert_eq!(pool.checked_out_count(), 0);
/// ```
#[derive(Debug)]
pub struct Lease<'a> {
    pool: &'a BoundedResourcePool,
    handle: ResourceHandle,
    armed: bool,
}

impl<'a> Lease<'a> {
    pub(crate) fn new(pool: &'a BoundedResourcePool, handle: ResourceHandle) -> Self {
        Self {
            pool,
            handle,
            armed: true,
        }
    }

    pub fn handle(&self) -> &ResourceHandle {
        &self.handle
    }

    /// Return the handle now instead of at drop.
    pub fn release(mut self) -> Result<(), PoolError> {
        self.armed = false;
        self.pool.return_item(self.handle.clone())
    }

    /// Keep the handle checked out; the caller must return it.
    pub fn detach(mut self) -> ResourceHandle {
        self.armed = false;
        self.handle.clone()
    }
}

impl Deref for Lease<'_> {
    type Target = ResourceHandle;

    fn deref(&self) -> &ResourceHandle {
        &self.handle
    }
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = self.pool.return_item(self.handle.clone()) {
            warn!(error = %err, "Lease could not return its handle");
        }
    }
}
