//! # Typed Event Channels
//!
//! One [`Emitter`] per event kind. Observers (sound, speech, hint visuals)
//! attach independently and are detached on disposal.
//!
//! ```text
//! GrabDragModel ──grabbed──┬──> closure listener (runs inline)
//!                          └──> channel listener ──> Receiver (polled per frame)
//! ```
//!
//! Listeners are snapshotted before notification, so a listener may
//! subscribe, unsubscribe, or emit again without deadlocking.

use crossbeam_channel::{bounded, Receiver, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handle returned by a subscription, used to detach that listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

fn next_listener_id() -> ListenerId {
    ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Publish/subscribe list for a single event kind.
pub struct Emitter<T> {
    listeners: Mutex<Vec<(ListenerId, Listener<T>)>>,
}

impl<T> Emitter<T> {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Attaches a listener that runs synchronously on every emit.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = next_listener_id();
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Detaches a listener. Returns false if it was not attached.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Returns true if the listener is attached.
    #[must_use]
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.lock().iter().any(|(existing, _)| *existing == id)
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Notifies every listener, in subscription order.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(event);
        }
    }

    /// Detaches every listener.
    pub fn dispose(&self) {
        self.listeners.lock().clear();
    }
}

impl<T: Clone + Send + 'static> Emitter<T> {
    /// Attaches a bounded queue that receives a copy of every event.
    ///
    /// Events emitted while the queue is full are dropped and logged;
    /// emitting never blocks. The listener detaches itself once the
    /// receiver is dropped.
    pub fn subscribe_channel(self: &Arc<Self>, capacity: usize) -> (ListenerId, Receiver<T>) {
        let (tx, rx) = bounded(capacity);
        let weak = Arc::downgrade(self);
        let id = next_listener_id();

        let listener: Listener<T> = Arc::new(move |event: &T| match tx.try_send(event.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("event queue full (capacity {capacity}), dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                if let Some(emitter) = weak.upgrade() {
                    emitter.unsubscribe(id);
                }
            }
        });

        self.listeners.lock().push((id, listener));
        (id, rx)
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_reaches_all_listeners_in_order() {
        let emitter = Emitter::<u32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let a = Arc::clone(&log);
        emitter.subscribe(move |v| a.lock().push(("a", *v)));
        let b = Arc::clone(&log);
        emitter.subscribe(move |v| b.lock().push(("b", *v)));

        emitter.emit(&7);
        assert_eq!(*log.lock(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let emitter = Emitter::<()>::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let id = emitter.subscribe(move |()| {
            h.fetch_add(1, Ordering::Relaxed);
        });

        emitter.emit(&());
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&());

        assert_eq!(hits.load(Ordering::Relaxed), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let emitter = Arc::new(Emitter::<()>::new());
        let slot: Arc<Mutex<Option<ListenerId>>> = Arc::new(Mutex::new(None));

        let e = Arc::clone(&emitter);
        let s = Arc::clone(&slot);
        let id = emitter.subscribe(move |()| {
            if let Some(id) = *s.lock() {
                e.unsubscribe(id);
            }
        });
        *slot.lock() = Some(id);

        emitter.emit(&());
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_channel_subscriber() {
        let emitter = Arc::new(Emitter::<u8>::new());
        let (_id, rx) = emitter.subscribe_channel(2);

        emitter.emit(&1);
        emitter.emit(&2);
        emitter.emit(&3); // dropped, queue full

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_channel_detaches_when_receiver_dropped() {
        let emitter = Arc::new(Emitter::<u8>::new());
        let (id, rx) = emitter.subscribe_channel(4);
        drop(rx);

        emitter.emit(&1);
        assert!(!emitter.has_listener(id));
    }

    #[test]
    fn test_dispose_clears_listeners() {
        let emitter = Emitter::<u8>::new();
        emitter.subscribe(|_| {});
        emitter.subscribe(|_| {});
        emitter.dispose();
        assert_eq!(emitter.listener_count(), 0);
    }
}
