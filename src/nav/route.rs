// Route - shows its content only while its path is the current one

use super::location::{LocationStore, SubscriptionHandle};
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

/// A (path, content) registration against a location store.
///
/// The route keeps its own copy of the last observed path, updated through
/// a store subscription. Matching is exact string equality; a mismatch
/// renders nothing and is not an error. Dropping the route unsubscribes it.
pub struct Route {
    path: String,
    observed: Rc<RefCell<String>>,
    _subscription: SubscriptionHandle,
}

impl Route {
    /// Mount a route: read the current path and start listening for changes.
    pub fn new(store: &LocationStore, path: impl Into<String>) -> Self {
        let observed = Rc::new(RefCell::new(store.current()));
        let subscription = {
            let observed = Rc::clone(&observed);
            store.subscribe(move |path| *observed.borrow_mut() = path.to_string())
        };
        Self {
            path: path.into(),
            observed,
            _subscription: subscription,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the last observed path equals this route's path.
    pub fn is_active(&self) -> bool {
        *self.observed.borrow() == self.path
    }

    /// Render `content` if the route is active, nothing otherwise.
    ///
    /// The closure is only invoked while active, so inactive views cost
    /// nothing per frame.
    pub fn show<R>(
        &self,
        ui: &mut egui::Ui,
        content: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        if self.is_active() {
            Some(content(ui))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::host::ProcessLocation;

    fn store_at(path: &str) -> LocationStore {
        LocationStore::new(Box::new(ProcessLocation::new(path)))
    }

    #[test]
    fn initial_state_comes_from_store_startup_value() {
        let store = store_at("/");
        let home = Route::new(&store, "/");
        let jobs = Route::new(&store, "/jobs");

        assert!(home.is_active());
        assert!(!jobs.is_active());
    }

    #[test]
    fn navigation_flips_active_routes() {
        let store = store_at("/");
        let home = Route::new(&store, "/");
        let jobs = Route::new(&store, "/jobs");

        store.navigate("/jobs");
        assert!(!home.is_active());
        assert!(jobs.is_active());
    }

    #[test]
    fn matching_is_exact_string_equality() {
        let store = store_at("/job");
        let jobs = Route::new(&store, "/jobs");
        assert!(!jobs.is_active());
    }

    #[test]
    fn renavigating_to_current_path_keeps_route_active() {
        let store = store_at("/jobs");
        let jobs = Route::new(&store, "/jobs");

        store.navigate("/jobs");
        assert!(jobs.is_active());
        assert_eq!(store.current(), "/jobs");
    }

    #[test]
    fn unknown_path_deactivates_everything() {
        let store = store_at("/");
        let home = Route::new(&store, "/");
        let jobs = Route::new(&store, "/jobs");

        store.navigate("/nowhere");
        assert!(!home.is_active());
        assert!(!jobs.is_active());
    }

    #[test]
    fn dropped_route_releases_its_subscription() {
        let store = store_at("/");
        let route = Route::new(&store, "/jobs");
        drop(route);
        // Must not panic or touch the dropped route's state.
        store.navigate("/jobs");
        assert_eq!(store.current(), "/jobs");
    }

    #[test]
    fn route_tracks_changes_mounted_after_startup() {
        let store = store_at("/");
        store.navigate("/messaging");
        let messaging = Route::new(&store, "/messaging");
        assert!(messaging.is_active());

        store.navigate("/");
        assert!(!messaging.is_active());
    }
}
