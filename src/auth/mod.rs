// ABOUTME: Authentication gate for the chat view
// Credential comparison is behind the CredentialCheck trait so the strategy can change

pub mod error;

pub use error::AuthError;

use crate::session::Session;
use tracing::{info, warn};

/// Fixed login secret
pub const DEFAULT_SECRET: &str = "password";

pub trait CredentialCheck: Send + Sync {
    fn check(&self, input: &str) -> bool;
}

/// Plain string equality against a stored secret. No hashing.
#[derive(Debug, Clone)]
pub struct PlainSecret {
    secret: String,
}

impl PlainSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for PlainSecret {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

impl CredentialCheck for PlainSecret {
    fn check(&self, input: &str) -> bool {
        input == self.secret
    }
}

pub struct Authenticator {
    check: Box<dyn CredentialCheck>,
}

impl Authenticator {
    pub fn new(check: Box<dyn CredentialCheck>) -> Self {
        Self { check }
    }

    pub fn authenticate(&self, submitted: &str) -> bool {
        self.check.check(submitted)
    }

    /// Marks the session authenticated when the credential matches.
    /// A mismatch leaves the session untouched.
    pub fn login(&self, session: &mut Session, submitted: &str) -> Result<(), AuthError> {
        if self.authenticate(submitted) {
            session.authenticated = true;
            info!("Session {} authenticated", session.id);
            Ok(())
        } else {
            warn!("Rejected login attempt for session {}", session.id);
            Err(AuthError::IncorrectCredential)
        }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(Box::new(PlainSecret::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl CredentialCheck for AcceptAll {
        fn check(&self, _input: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_correct_password_authenticates() {
        let auth = Authenticator::default();
        let mut session = Session::default();

        assert!(auth.login(&mut session, "password").is_ok());
        assert!(session.authenticated);
    }

    #[test]
    fn test_wrong_passwords_leave_session_unauthenticated() {
        let auth = Authenticator::default();
        let mut session = Session::default();

        for attempt in ["", "Password", "password ", "hunter2", " password"] {
            let err = auth.login(&mut session, attempt).unwrap_err();
            assert_eq!(err.to_string(), "Incorrect password. Please try again.");
            assert!(!session.authenticated);
        }
    }

    #[test]
    fn test_credential_check_is_swappable() {
        let auth = Authenticator::new(Box::new(AcceptAll));
        assert!(auth.authenticate("anything"));
    }
}
