//! Fixed-capacity pool of interchangeable resources.

use super::config::PoolConfig;
use super::error::{PoolError, ScopedError};
use super::event::PoolEvent;
use super::handle::{HandleId, Ownership, ResourceHandle};
use super::lease::Lease;
use crate::observer::Observer;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// Read-only snapshot of a pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolStatus {
    pub capacity: usize,
    pub available: BTreeSet<HandleId>,
    pub checked_out: BTreeSet<HandleId>,
}

#[derive(Debug)]
struct Slots {
    available: Vec<HandleId>,
    /// Outstanding loans as `(handle, loan number)`.
    checked_out: Vec<(HandleId, u64)>,
    next_loan: u64,
}

impl Slots {
    fn position(&self, id: HandleId, loan: u64) -> Option<usize> {
        self.checked_out
            .iter()
            .position(|&(out, number)| out == id && number == loan)
    }
}

/// Pool that loans out a fixed number of handles.
///
/// `available` and `checked_out` are disjoint and together always hold every
/// handle `0..capacity`. Both sit behind one mutex; each operation holds it
/// for its whole mutation, and observers run after it is released.
///
/// Every checkout opens a new loan with its own number. Only a handle from
/// the loan that is currently outstanding can return the resource, so a stale
/// copy never releases a later holder's loan.
///
/// # Example
///
/// ```rust
/// use waypoint::pool::{BoundedResourcePool, PoolConfig, PoolError};
///
/// let pool = BoundedResourcePool::new(PoolConfig::new("printers", 2)).unwrap();
///
/// let first = pool.checkout().unwrap();
/// let _second = pool.checkout().unwrap();
/// assert!(matches!(pool.checkout(), Err(PoolError::PoolExhausted { .. })));
///
/// pool.return_item(first).unwrap();
/// assert_eq!(pool.available_count(), 1);
/// ```
#[derive(Debug)]
pub struct BoundedResourcePool {
    id: Uuid,
    config: PoolConfig,
    slots: Mutex<Slots>,
    observer: Observer<PoolEvent>,
}

impl BoundedResourcePool {
    /// Create a pool with every handle available.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        Self::with_observer(config, Observer::new())
    }

    /// Create a pool that reports checkouts and returns to `observer`.
    pub fn with_observer(
        config: PoolConfig,
        observer: Observer<PoolEvent>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::assemble(config, observer))
    }

    /// Build from an already validated configuration.
    pub(crate) fn assemble(config: PoolConfig, observer: Observer<PoolEvent>) -> Self {
        let available = (0..config.capacity).map(HandleId).collect();
        let id = Uuid::new_v4();
        debug!(pool = %config.name, capacity = config.capacity, %id, "Created pool");
        Self {
            id,
            config,
            slots: Mutex::new(Slots {
                available,
                checked_out: Vec::new(),
                next_loan: 0,
            }),
            observer,
        }
    }

    /// Take a handle out of the pool.
    ///
    /// Fails immediately with [`PoolError::PoolExhausted`] when nothing is
    /// available; it never waits.
    pub fn checkout(&self) -> Result<ResourceHandle, PoolError> {
        let taken = {
            let mut slots = self.slots.lock();
            match slots.available.pop() {
                Some(id) => {
                    let loan = slots.next_loan;
                    slots.next_loan += 1;
                    slots.checked_out.push((id, loan));
                    Some((id, loan))
                }
                None => None,
            }
        };

        match taken {
            Some((id, loan)) => {
                debug!(pool = %self.config.name, handle = %id, loan, "Checked out resource");
                self.observer.notify(&PoolEvent::CheckedOut { id });
                Ok(ResourceHandle::new(id, self.id, loan))
            }
            None => {
                warn!(
                    pool = %self.config.name,
                    capacity = self.config.capacity,
                    "Pool exhausted"
                );
                self.observer.notify(&PoolEvent::Exhausted);
                Err(PoolError::PoolExhausted {
                    pool: self.config.name.clone(),
                    capacity: self.config.capacity,
                })
            }
        }
    }

    /// Put a checked-out handle back.
    ///
    /// Returning a handle twice, one whose loan already ended (even if the
    /// resource is on loan again), or one issued by another pool, fails with
    /// [`PoolError::InvalidReturn`] and leaves the pool unchanged.
    pub fn return_item(&self, handle: ResourceHandle) -> Result<(), PoolError> {
        let id = handle.id();
        let loan = handle.loan();
        let returned = handle.pool_id() == self.id && {
            let mut slots = self.slots.lock();
            match slots.position(id, loan) {
                Some(index) => {
                    slots.checked_out.swap_remove(index);
                    slots.available.push(id);
                    true
                }
                None => false,
            }
        };

        if returned {
            debug!(pool = %self.config.name, handle = %id, loan, "Returned resource");
            self.observer.notify(&PoolEvent::Returned { id });
            Ok(())
        } else {
            warn!(pool = %self.config.name, handle = %id, loan, "Rejected invalid return");
            self.observer.notify(&PoolEvent::InvalidReturn { id });
            Err(PoolError::InvalidReturn {
                pool: self.config.name.clone(),
                handle: id,
            })
        }
    }

    /// Check out a handle wrapped in a [`Lease`] that returns it on drop.
    pub fn lease(&self) -> Result<Lease<'_>, PoolError> {
        self.checkout().map(|handle| Lease::new(self, handle))
    }

    /// Run `work` with a checked-out handle and return the handle afterwards.
    ///
    /// The handle goes back to the pool whether `work` returns `Ok`, returns
    /// `Err`, or panics.
    ///
    /// ```rust
    /// use waypoint::pool::{BoundedResourcePool, PoolConfig, ScopedError};
    ///
    /// let pool = BoundedResourcePool::new(PoolConfig::default()).unwrap();
    ///
    /// let result: Result<(), ScopedError<&str>> = pool.scoped_checkout(|_handle| Err("disk full"));
    ///
    /// assert!(matches!(result, Err(ScopedError::Work("disk full"))));
    /// assert_eq!(pool.available_count(), 3);
    /// ```
    pub fn scoped_checkout<T, E, F>(&self, work: F) -> Result<T, ScopedError<E>>
    where
        F: FnOnce(&ResourceHandle) -> Result<T, E>,
    {
        let lease = self.lease().map_err(ScopedError::Pool)?;
        let outcome = work(lease.handle());
        let released = lease.release();

        let value = outcome.map_err(ScopedError::Work)?;
        released.map_err(ScopedError::Pool)?;
        Ok(value)
    }

    /// Snapshot of available and checked-out handles.
    pub fn status(&self) -> PoolStatus {
        let slots = self.slots.lock();
        PoolStatus {
            capacity: self.config.capacity,
            available: slots.available.iter().copied().collect(),
            checked_out: slots.checked_out.iter().map(|&(id, _)| id).collect(),
        }
    }

    /// Whether `handle`'s loan is still outstanding, or `None` if another
    /// pool issued it.
    ///
    /// A handle whose loan has ended reports [`Ownership::InPool`], even while
    /// the same resource is on loan to someone else.
    pub fn ownership(&self, handle: &ResourceHandle) -> Option<Ownership> {
        if handle.pool_id() != self.id {
            return None;
        }
        let slots = self.slots.lock();
        if slots.position(handle.id(), handle.loan()).is_some() {
            Some(Ownership::CheckedOut)
        } else {
            Some(Ownership::InPool)
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn available_count(&self) -> usize {
        self.slots.lock().available.len()
    }

    pub fn checked_out_count(&self) -> usize {
        self.slots.lock().checked_out.len()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Unique identifier of this pool instance.
    pub fn id(&self) -> Uuid {
        self.id
    }
}
