// Simulated backend worker - fake API calls with a fixed delay

use super::error::ApiError;
use super::seed;
use crate::model::{Account, Post};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Fixed round-trip latency for every fake call.
const LATENCY: Duration = Duration::from_millis(800);

pub enum ApiCommand {
    LogIn { email: String, password: String },
    SignUp { name: String, email: String, password: String },
    FetchFeed,
}

pub enum ApiResponse {
    SessionOpened(Account),
    AuthRejected(ApiError),
    FeedLoaded(Vec<Post>),
}

/// Spawn the backend thread. Commands go in, responses are polled by the
/// UI thread each frame; every response requests a repaint so results show
/// up without user input.
pub fn spawn_backend(ctx: eframe::egui::Context) -> (Sender<ApiCommand>, Receiver<ApiResponse>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel::<ApiResponse>();

    thread::spawn(move || {
        log::debug!("backend worker started");
        while let Ok(cmd) = cmd_rx.recv() {
            thread::sleep(LATENCY);
            let response = match cmd {
                ApiCommand::LogIn { email, password } => log_in(&email, &password),
                ApiCommand::SignUp { name, email, password } => sign_up(&name, &email, &password),
                ApiCommand::FetchFeed => ApiResponse::FeedLoaded(seed::posts()),
            };
            if res_tx.send(response).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        log::debug!("backend worker stopped");
    });

    (cmd_tx, res_rx)
}

// There is no real credential check; anything non-empty is accepted, the
// way the demo backend behaved.
fn log_in(email: &str, password: &str) -> ApiResponse {
    if email.trim().is_empty() || password.is_empty() {
        log::info!("login rejected for {:?}", email);
        return ApiResponse::AuthRejected(ApiError::LoginRejected);
    }
    log::info!("login accepted for {}", email);
    ApiResponse::SessionOpened(Account::new("John Doe", email.trim()))
}

fn sign_up(name: &str, email: &str, password: &str) -> ApiResponse {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        log::info!("sign-up rejected for {:?}", email);
        return ApiResponse::AuthRejected(ApiError::SignUpRejected);
    }
    log::info!("sign-up accepted for {}", email);
    ApiResponse::SessionOpened(Account::new(name.trim(), email.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn login_with_credentials_opens_a_session() {
        let (tx, rx) = spawn_backend(eframe::egui::Context::default());
        tx.send(ApiCommand::LogIn {
            email: "john@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            ApiResponse::SessionOpened(account) => {
                assert_eq!(account.email, "john@example.com");
            }
            _ => panic!("expected a session"),
        }
    }

    #[test]
    fn login_with_empty_password_is_rejected() {
        let (tx, rx) = spawn_backend(eframe::egui::Context::default());
        tx.send(ApiCommand::LogIn {
            email: "john@example.com".to_string(),
            password: String::new(),
        })
        .unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            ApiResponse::AuthRejected(err) => assert_eq!(err, ApiError::LoginRejected),
            _ => panic!("expected a rejection"),
        }
    }

    #[test]
    fn sign_up_uses_the_given_name() {
        let (tx, rx) = spawn_backend(eframe::egui::Context::default());
        tx.send(ApiCommand::SignUp {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            ApiResponse::SessionOpened(account) => assert_eq!(account.name, "Jane Smith"),
            _ => panic!("expected a session"),
        }
    }

    #[test]
    fn fetch_feed_returns_the_seed() {
        let (tx, rx) = spawn_backend(eframe::egui::Context::default());
        tx.send(ApiCommand::FetchFeed).unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            ApiResponse::FeedLoaded(posts) => assert!(!posts.is_empty()),
            _ => panic!("expected the feed"),
        }
    }
}
