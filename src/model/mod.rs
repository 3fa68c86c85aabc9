pub mod account;
pub mod connection;
pub mod job;
pub mod message;
pub mod notification;
pub mod post;

pub use account::{initials, Account};
pub use connection::Connection;
pub use job::JobPosting;
pub use message::{ChatMessage, Conversation};
pub use notification::Notification;
pub use post::{MediaKind, Post, PostMedia};
