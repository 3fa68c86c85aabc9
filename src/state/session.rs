// Session state - who is signed in, and the auth form machinery

use crate::model::Account;

/// Auth screen currently shown while signed out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuthScreen {
    Login,
    SignUp,
}

pub struct SessionState {
    pub account: Option<Account>,
    pub screen: AuthScreen,
    pub pending: bool,
    pub error: Option<String>,

    // Form buffers
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            account: None,
            screen: AuthScreen::Login,
            pending: false,
            error: None,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn switch_screen(&mut self, screen: AuthScreen) {
        self.screen = screen;
        self.error = None;
    }

    /// A login/sign-up request went out; lock the form.
    pub fn begin_request(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn open(&mut self, account: Account) {
        self.account = Some(account);
        self.pending = false;
        self.error = None;
        self.password.clear();
        self.confirm.clear();
    }

    pub fn reject(&mut self, reason: String) {
        self.pending = false;
        self.error = Some(reason);
    }

    pub fn sign_out(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_signed_out_on_login_screen() {
        let session = SessionState::new();
        assert!(!session.is_signed_in());
        assert_eq!(session.screen, AuthScreen::Login);
    }

    #[test]
    fn open_clears_pending_and_secrets() {
        let mut session = SessionState::new();
        session.password = "hunter2".to_string();
        session.begin_request();

        session.open(Account::new("John Doe", "john@example.com"));
        assert!(session.is_signed_in());
        assert!(!session.pending);
        assert!(session.password.is_empty());
    }

    #[test]
    fn reject_keeps_user_signed_out_with_error() {
        let mut session = SessionState::new();
        session.begin_request();
        session.reject("Login failed. Please try again.".to_string());

        assert!(!session.is_signed_in());
        assert!(!session.pending);
        assert!(session.error.is_some());
    }

    #[test]
    fn sign_out_resets_everything() {
        let mut session = SessionState::new();
        session.open(Account::new("John Doe", "john@example.com"));
        session.sign_out();

        assert!(!session.is_signed_in());
        assert_eq!(session.screen, AuthScreen::Login);
    }

    #[test]
    fn switching_screens_drops_stale_errors() {
        let mut session = SessionState::new();
        session.reject("nope".to_string());
        session.switch_screen(AuthScreen::SignUp);
        assert!(session.error.is_none());
    }
}
