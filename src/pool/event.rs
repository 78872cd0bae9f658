//! Events emitted by a pool.

use super::handle::HandleId;
use crate::observer::Event;

#[derive(Clone, Debug, PartialEq)]
pub enum PoolEvent {
    CheckedOut { id: HandleId },
    Returned { id: HandleId },
    Exhausted,
    InvalidReturn { id: HandleId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolEventKind {
    CheckedOut,
    Returned,
    Exhausted,
    InvalidReturn,
}

impl Event for PoolEvent {
    type Kind = PoolEventKind;

    fn kind(&self) -> PoolEventKind {
        match self {
            Self::CheckedOut { .. } => PoolEventKind::CheckedOut,
            Self::Returned { .. } => PoolEventKind::Returned,
            Self::Exhausted => PoolEventKind::Exhausted,
            Self::InvalidReturn { .. } => PoolEventKind::InvalidReturn,
        }
    }
}
