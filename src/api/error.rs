use thiserror::Error;

/// Rejections the simulated backend can hand back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Login failed. Please try again.")]
    LoginRejected,
    #[error("Registration failed. Please try again.")]
    SignUpRejected,
}
