//! Typed observer registry.
//!
//! Components describe what happened with an event enum. Each event reports
//! its kind, and callbacks are registered per kind. Notifying an event with
//! no registered callbacks does nothing.
//!
//! # Example
//!
//! ```rust
//! use waypoint::observer::{Event, Observer};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! enum Training {
//!     BatchDone { loss: f64 },
//!     EpochDone { accuracy: f64 },
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum TrainingKind {
//!     BatchDone,
//!     EpochDone,
//! }
//!
//! impl Event for Training {
//!     type Kind = TrainingKind;
//!
//!     fn kind(&self) -> TrainingKind {
//!         match self {
//!             Self::BatchDone { .. } => TrainingKind::BatchDone,
//!             Self::EpochDone { .. } => TrainingKind::EpochDone,
//!         }
//!     }
//! }
//!
//! let batches = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&batches);
//!
//! let observer = Observer::<Training>::new().on(TrainingKind::BatchDone, move |_event: &Training| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! observer.notify(&Training::BatchDone { loss: 0.4 });
//! observer.notify(&Training::EpochDone { accuracy: 0.9 });
//! assert_eq!(batches.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// An event with an explicit, enumerated kind.
pub trait Event {
    /// Discriminant used to route the event to callbacks.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    fn kind(&self) -> Self::Kind;
}

/// Callback invoked with a borrowed event.
pub type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Registry of callbacks keyed by event kind.
pub struct Observer<E: Event> {
    callbacks: HashMap<E::Kind, Vec<Callback<E>>>,
}

impl<E: Event> Observer<E> {
    /// Create an observer with no callbacks.
    pub fn new() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }

    /// Register a callback for `kind`, builder style.
    pub fn on<F>(mut self, kind: E::Kind, callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.register(kind, callback);
        self
    }

    /// Register a callback for `kind`.
    pub fn register<F>(&mut self, kind: E::Kind, callback: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.callbacks
            .entry(kind)
            .or_default()
            .push(Arc::new(callback));
    }

    /// Invoke every callback registered for the event's kind, in
    /// registration order.
    pub fn notify(&self, event: &E) {
        if let Some(callbacks) = self.callbacks.get(&event.kind()) {
            for callback in callbacks {
                callback(event);
            }
        }
    }

    /// Number of callbacks registered for `kind`.
    pub fn callback_count(&self, kind: E::Kind) -> usize {
        self.callbacks.get(&kind).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.values().all(Vec::is_empty)
    }
}

impl<E: Event> Default for Observer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for Observer<E> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<E: Event> Debug for Observer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self
            .callbacks
            .iter()
            .map(|(kind, callbacks)| (*kind, callbacks.len()))
            .collect();
        kinds.sort_by_key(|(kind, _)| format!("{kind:?}"));
        f.debug_struct("Observer").field("callbacks", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Signal {
        Ping(u32),
        Pong,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum SignalKind {
        Ping,
        Pong,
    }

    impl Event for Signal {
        type Kind = SignalKind;

        fn kind(&self) -> SignalKind {
            match self {
                Self::Ping(_) => SignalKind::Ping,
                Self::Pong => SignalKind::Pong,
            }
        }
    }

    #[test]
    fn notify_routes_by_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let observer = Observer::<Signal>::new().on(SignalKind::Ping, move |event: &Signal| {
            sink.lock().push(event.clone());
        });

        observer.notify(&Signal::Ping(1));
        observer.notify(&Signal::Pong);
        observer.notify(&Signal::Ping(2));

        assert_eq!(*seen.lock(), vec![Signal::Ping(1), Signal::Ping(2)]);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&order);
        let second = Arc::clone(&order);

        let mut observer = Observer::<Signal>::new();
        observer.register(SignalKind::Pong, move |_: &Signal| first.lock().push("first"));
        observer.register(SignalKind::Pong, move |_: &Signal| second.lock().push("second"));

        observer.notify(&Signal::Pong);

        assert_eq!(*order.lock(), vec!["first", "second"]);
        assert_eq!(observer.callback_count(SignalKind::Pong), 2);
        assert_eq!(observer.callback_count(SignalKind::Ping), 0);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let observer: Observer<Signal> = Observer::new();
        assert!(observer.is_empty());
        observer.notify(&Signal::Pong);
    }

    #[test]
    fn clone_shares_callbacks() {
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        let observer = Observer::<Signal>::new().on(SignalKind::Ping, move |_: &Signal| {
            *counter.lock() += 1;
        });

        let copy = observer.clone();
        observer.notify(&Signal::Ping(0));
        copy.notify(&Signal::Ping(0));

        assert_eq!(*hits.lock(), 2);
    }
}
