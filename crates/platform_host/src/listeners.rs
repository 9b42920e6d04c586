//! Single-threaded publish/subscribe primitive used by host and runtime broadcasters.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<dyn Fn(&T)>;

struct ListenerRegistry<T> {
    next_id: u64,
    listeners: BTreeMap<u64, Listener<T>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            listeners: BTreeMap::new(),
        }
    }
}

/// Owned set of listeners notified in subscription order.
///
/// Cloning shares the same registry.
pub struct ListenerSet<T> {
    inner: Rc<RefCell<ListenerRegistry<T>>>,
}

impl<T> Clone for ListenerSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for ListenerSet<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerRegistry::default())),
        }
    }
}

impl<T> std::fmt::Debug for ListenerSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("listeners", &self.len())
            .finish()
    }
}

impl<T> ListenerSet<T> {
    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Returns whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> ListenerSet<T> {
    /// Registers `listener` and returns the handle that removes it again.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id = registry.next_id.saturating_add(1);
            registry.listeners.insert(id, Rc::new(listener));
            id
        };

        let registry: Weak<RefCell<ListenerRegistry<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(Rc::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.remove(&id);
            }
        }))
    }

    /// Delivers `value` to every registered listener.
    ///
    /// Listeners may subscribe or unsubscribe while being notified. A listener removed during the
    /// broadcast is skipped; one added during the broadcast first hears the next one.
    pub fn notify(&self, value: &T) {
        let ids: Vec<u64> = self.inner.borrow().listeners.keys().copied().collect();
        for id in ids {
            let listener = self.inner.borrow().listeners.get(&id).cloned();
            if let Some(listener) = listener {
                listener(value);
            }
        }
    }
}

/// Drop-based unsubscribe handle returned by [`ListenerSet::subscribe`].
#[must_use = "dropping a subscription unsubscribes the listener; call `detach` to keep it"]
pub struct Subscription {
    unsubscribe: Rc<dyn Fn()>,
    active: Cell<bool>,
}

impl Subscription {
    fn new(unsubscribe: Rc<dyn Fn()>) -> Self {
        Self {
            unsubscribe,
            active: Cell::new(true),
        }
    }

    /// Removes the listener if it is still registered.
    pub fn unsubscribe(&self) {
        if self.active.replace(false) {
            (self.unsubscribe)();
        }
    }

    /// Returns whether the listener is still registered through this handle.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Keeps the listener registered for the rest of the session.
    pub fn detach(self) {
        self.active.set(false);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn listeners_are_notified_in_subscription_order() {
        let set = ListenerSet::<u32>::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            set.subscribe(move |v| seen.borrow_mut().push(("first", *v)))
        };
        let second = {
            let seen = seen.clone();
            set.subscribe(move |v| seen.borrow_mut().push(("second", *v)))
        };

        set.notify(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        assert!(first.is_active() && second.is_active());
    }

    #[test]
    fn dropping_subscription_unsubscribes_and_detach_keeps_listener() {
        let set = ListenerSet::<()>::default();
        let hits = Rc::new(Cell::new(0));

        {
            let hits = hits.clone();
            let _scoped = set.subscribe(move |_| hits.set(hits.get() + 1));
        }
        assert!(set.is_empty());

        {
            let hits = hits.clone();
            set.subscribe(move |_| hits.set(hits.get() + 1)).detach();
        }
        set.notify(&());
        assert_eq!(set.len(), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_removed_mid_broadcast_is_skipped() {
        let set = ListenerSet::<()>::default();
        let late_hits = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _remover = {
            let victim = victim.clone();
            set.subscribe(move |_| {
                if let Some(subscription) = victim.borrow().as_ref() {
                    subscription.unsubscribe();
                }
            })
        };
        let hits = late_hits.clone();
        *victim.borrow_mut() = Some(set.subscribe(move |_| hits.set(hits.get() + 1)));

        set.notify(&());

        assert_eq!(late_hits.get(), 0);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let set = ListenerSet::<()>::default();
        let subscription = set.subscribe(|_| {});
        subscription.unsubscribe();
        subscription.unsubscribe();
        assert!(!subscription.is_active());
        assert!(set.is_empty());
    }
}
