// ABOUTME: Error types for the login gate

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect password. Please try again.")]
    IncorrectCredential,
}
