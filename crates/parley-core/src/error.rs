use parley_db::StoreError;
use thiserror::Error;

/// Input-shape failures, detected before any store call. Each rule is a
/// distinct variant so callers can tell the user what to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must contain '@'")]
    MalformedEmail,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password must be at least 6 characters")]
    ShortPassword,
    #[error("message body must not be empty")]
    EmptyBody,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Unique-constraint violation on registration, reported by the
    /// store itself (never pre-checked).
    #[error("email already registered")]
    DuplicateEmail,
    /// The email resolves to no user.
    #[error("no such user")]
    NotFound,
    #[error("credential hashing failed: {0}")]
    Hash(#[from] parley_auth::HashError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
