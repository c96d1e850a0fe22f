//! Observable values.
//!
//! A [`Property`] holds a value and notifies `(new, old)` to its listeners
//! whenever `set` actually changes it. The value lock is released before
//! listeners run, so listeners may read or write the property again.

use crate::event::{Emitter, ListenerId};
use parking_lot::RwLock;

/// An observable value.
pub struct Property<T> {
    value: RwLock<T>,
    changed: Emitter<(T, T)>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Property<T> {
    /// Creates a property holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            changed: Emitter::new(),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value.read().clone()
    }

    /// Replaces the value. Listeners run only when the value changed.
    ///
    /// Returns true if the value changed.
    pub fn set(&self, new_value: T) -> bool {
        let old = {
            let mut guard = self.value.write();
            if *guard == new_value {
                return false;
            }
            std::mem::replace(&mut *guard, new_value.clone())
        };
        self.changed.emit(&(new_value, old));
        true
    }

    /// Applies `f` to the value and notifies if the result differs.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = {
            let guard = self.value.read();
            f(&*guard)
        };
        self.set(next)
    }

    /// Attaches a listener for future changes only.
    pub fn lazy_link<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        self.changed.subscribe(move |(new, old)| listener(new, old))
    }

    /// Attaches a listener and immediately calls it with the current value.
    ///
    /// On the immediate call `old` equals `new`.
    pub fn link<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        let current = self.value();
        listener(&current, &current);
        self.lazy_link(listener)
    }

    /// Detaches a listener. Returns false if it was not attached.
    pub fn unlink(&self, id: ListenerId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Returns true if the listener is attached.
    #[must_use]
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.changed.has_listener(id)
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.changed.listener_count()
    }

    /// Detaches every listener. The value stays readable.
    pub fn dispose(&self) {
        self.changed.dispose();
    }
}

impl<T: Clone + PartialEq + Send + Sync + Default + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .field("listeners", &self.changed.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_set_notifies_only_on_change() {
        let prop = Property::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        prop.lazy_link(move |new, old| s.lock().push((*new, *old)));

        assert!(prop.set(2));
        assert!(!prop.set(2));
        assert!(prop.set(5));

        assert_eq!(*seen.lock(), vec![(2, 1), (5, 2)]);
        assert_eq!(prop.value(), 5);
    }

    #[test]
    fn test_link_fires_immediately() {
        let prop = Property::new("idle");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        prop.link(move |new, _| s.lock().push(*new));
        prop.set("grabbed");

        assert_eq!(*seen.lock(), vec!["idle", "grabbed"]);
    }

    #[test]
    fn test_listener_can_write_back() {
        let prop = Arc::new(Property::new(0));
        let p = Arc::clone(&prop);
        // Saturate at 10.
        prop.lazy_link(move |new, _| {
            if *new > 10 {
                p.set(10);
            }
        });

        prop.set(42);
        assert_eq!(prop.value(), 10);
    }

    #[test]
    fn test_update() {
        let prop = Property::new(3);
        assert!(prop.update(|v| v + 1));
        assert_eq!(prop.value(), 4);
    }

    #[test]
    fn test_unlink_and_dispose() {
        let prop = Property::new(0u8);
        let a = prop.lazy_link(|_, _| {});
        prop.lazy_link(|_, _| {});

        assert!(prop.unlink(a));
        assert_eq!(prop.listener_count(), 1);

        prop.dispose();
        assert_eq!(prop.listener_count(), 0);
        assert!(prop.set(1));
    }
}
