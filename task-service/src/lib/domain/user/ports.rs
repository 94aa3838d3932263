use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// The plaintext password is hashed before it reaches any adapter.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for the credential store.
///
/// The store enforces username uniqueness at its boundary; a lookup by
/// username is a single atomic read.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password_hash` - Opaque hash string, never the plaintext
    ///
    /// # Returns
    /// Created user entity with its store-assigned id
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique constraint violation; no partial write
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, username: &Username, password_hash: &str) -> Result<User, UserError>;

    /// Retrieve user by username (case-sensitive exact match).
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
