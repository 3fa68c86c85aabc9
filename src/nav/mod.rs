// Client-side navigation core: location store, routes, links

pub mod host;
pub mod link;
pub mod location;
pub mod route;

pub use host::{HostLocation, ProcessLocation};
pub use link::Link;
pub use location::{LocationStore, SubscriptionHandle};
pub use route::Route;
