pub mod error;
pub mod seed;
pub mod worker;

pub use error::ApiError;
pub use worker::{spawn_backend, ApiCommand, ApiResponse};
