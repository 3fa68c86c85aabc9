pub mod feed;
pub mod jobs;
pub mod messaging;
pub mod network;
pub mod notifications;
pub mod session;

pub use feed::FeedState;
pub use jobs::JobsState;
pub use messaging::MessagingState;
pub use network::NetworkState;
pub use notifications::NotificationsState;
pub use session::{AuthScreen, SessionState};
