// Location store - single source of truth for the current navigation path

use super::host::HostLocation;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback invoked with the new path on every navigation.
type ChangeCallback = Rc<dyn Fn(&str)>;

struct StoreInner {
    host: Box<dyn HostLocation>,
    current: String,
    subscribers: Vec<(u64, ChangeCallback)>,
    next_id: u64,
}

/// Single source of truth for "what is the current path".
///
/// Cloning hands out another handle to the same store; there is no global
/// instance, the app constructs one and injects it into every route and
/// link. The UI runs on one thread, so interior mutability is a plain
/// `RefCell`.
///
/// `navigate` is synchronous: by the time it returns, every subscriber has
/// already been told about the new path, in the order they subscribed.
#[derive(Clone)]
pub struct LocationStore {
    inner: Rc<RefCell<StoreInner>>,
}

/// Registration receipt for a change callback.
///
/// Dropping the handle removes the callback from the store, so a subscriber
/// that goes away can never be invoked again. `LocationStore::unsubscribe`
/// is the explicit spelling of the same thing.
pub struct SubscriptionHandle {
    store: Weak<RefCell<StoreInner>>,
    id: u64,
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl LocationStore {
    /// Build a store reading its starting path from the host location.
    pub fn new(host: Box<dyn HostLocation>) -> Self {
        let current = host.location();
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                host,
                current,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The path active right now.
    pub fn current(&self) -> String {
        self.inner.borrow().current.clone()
    }

    /// Make `path` current, push it into the host location, and notify
    /// every subscriber before returning.
    ///
    /// Any string is an accepted path. Navigating to the path already
    /// current still notifies; nothing is deduplicated.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        {
            let mut inner = self.inner.borrow_mut();
            inner.host.push(&path);
            inner.current = path;
        }
        self.broadcast();
    }

    /// Step the host history back. Notifies on success.
    pub fn back(&self) -> bool {
        self.traverse(|host| host.back())
    }

    /// Step the host history forward. Notifies on success.
    pub fn forward(&self) -> bool {
        self.traverse(|host| host.forward())
    }

    fn traverse(&self, step: impl FnOnce(&mut dyn HostLocation) -> Option<String>) -> bool {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            match step(inner.host.as_mut()) {
                Some(path) => {
                    inner.current = path;
                    true
                }
                None => false,
            }
        };
        if moved {
            self.broadcast();
        }
        moved
    }

    /// Register a change callback; the returned handle keeps it alive.
    pub fn subscribe(&self, callback: impl Fn(&str) + 'static) -> SubscriptionHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        SubscriptionHandle {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Remove a callback explicitly. Equivalent to dropping the handle.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        drop(handle);
    }

    fn broadcast(&self) {
        // Snapshot under a short borrow: a callback is allowed to call
        // current(), subscribe, or unsubscribe while we deliver. Callbacks
        // registered during delivery only see the next change; callbacks
        // removed during delivery are skipped via the liveness check.
        let (path, snapshot): (String, Vec<(u64, ChangeCallback)>) = {
            let inner = self.inner.borrow();
            (inner.current.clone(), inner.subscribers.clone())
        };
        for (id, callback) in snapshot {
            let alive = self
                .inner
                .borrow()
                .subscribers
                .iter()
                .any(|(sub_id, _)| *sub_id == id);
            if alive {
                callback(&path);
            }
        }
    }
}
