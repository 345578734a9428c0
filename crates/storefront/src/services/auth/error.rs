//! Account service error types.

use thiserror::Error;

use mango_stand_core::EmailError;

/// Errors that can occur during register/login.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A required registration field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Email/password pair does not match the stored record (or no record
    /// exists). Deliberately one message for both cases.
    #[error("invalid credentials")]
    InvalidCredentials,
}
