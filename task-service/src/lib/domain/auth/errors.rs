use thiserror::Error;

use crate::user::errors::UserError;

/// Error for authentication gate operations.
///
/// `InvalidCredentials` and `Unauthenticated` are the only variants a caller
/// may surface; both carry a uniform message with no hint of which internal
/// check failed.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        // Credential store lookups only surface infrastructure failures here
        AuthError::DatabaseError(err.to_string())
    }
}
