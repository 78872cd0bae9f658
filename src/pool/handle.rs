//! Resource handles issued by a pool.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Index of a resource inside its pool, `0..capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandleId(pub usize);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a resource sits in the pool or is on loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    InPool,
    CheckedOut,
}

/// Reference to a pool-managed resource, valid until returned.
///
/// A handle remembers which pool issued it, so returning it anywhere else is
/// rejected. It also carries the number of the loan it was issued under;
/// once that loan ends, the handle and all of its clones are stale even if
/// the same resource has been checked out again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    id: HandleId,
    pool: Uuid,
    loan: u64,
}

impl ResourceHandle {
    pub(crate) fn new(id: HandleId, pool: Uuid, loan: u64) -> Self {
        Self { id, pool, loan }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Identifier of the issuing pool.
    pub fn pool_id(&self) -> Uuid {
        self.pool
    }

    /// Loan number, unique per checkout within the issuing pool.
    pub fn loan(&self) -> u64 {
        self.loan
    }
}
