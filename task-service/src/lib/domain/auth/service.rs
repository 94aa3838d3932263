use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Authentication gate.
///
/// Composes the credential store, password verification, and token
/// issuance to answer "who is making this request, and may they proceed?".
/// Internal failure distinctions are logged here and collapsed to uniform
/// outcomes before any caller sees them.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication gate.
    ///
    /// # Arguments
    /// * `repository` - Credential store adapter
    /// * `token_service` - Token issuer/verifier holding the signing secret
    pub fn new(repository: Arc<UR>, token_service: TokenService) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Check a username/password pair against the credential store.
    ///
    /// An unknown username and a wrong password both come back as `None`;
    /// callers cannot tell which check failed.
    pub async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let user = match self.repository.find_by_username(username).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if self.password_hasher.verify(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, username: &Username, password: &str) -> Result<AccessToken, AuthError> {
        let user = self
            .authenticate(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self
            .token_service
            .issue(user.username.as_str())
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;

        Ok(AccessToken { token })
    }

    async fn authorize(&self, token: &str) -> Result<User, AuthError> {
        let subject = self.token_service.verify(token).map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            AuthError::Unauthenticated
        })?;

        let username = Username::new(subject).map_err(|e| {
            tracing::warn!("Token subject is not a valid username: {}", e);
            AuthError::Unauthenticated
        })?;

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
