use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for the authentication gate.
///
/// Every protected operation uses `authorize` as its precondition; `login`
/// is the only way a token comes into existence.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and mint a bearer token for the user.
    ///
    /// # Arguments
    /// * `username` - Username to authenticate
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// AccessToken carrying the signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password, indistinguishably
    /// * `TokenGeneration` - Internal signing failure
    /// * `DatabaseError` - Credential store failure
    async fn login(&self, username: &Username, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token to the user it authenticates.
    ///
    /// The token's subject is re-resolved against the credential store on
    /// every call; nothing is cached across requests.
    ///
    /// # Arguments
    /// * `token` - Bearer token string as presented by the caller
    ///
    /// # Returns
    /// The authenticated user record
    ///
    /// # Errors
    /// * `Unauthenticated` - Any verification failure or a vanished subject,
    ///   indistinguishably
    /// * `DatabaseError` - Credential store failure
    async fn authorize(&self, token: &str) -> Result<User, AuthError>;
}
