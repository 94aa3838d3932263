use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user registration.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        self.repository
            .create(&command.username, &password_hash)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, username: &Username, password_hash: &str) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|username, password_hash| {
                username.as_str() == "testuser"
                    // The adapter receives an Argon2 hash, never the plaintext
                    && password_hash.starts_with("$argon2")
                    && !password_hash.contains("password123")
            })
            .times(1)
            .returning(|username, password_hash| {
                Ok(User {
                    id: UserId(1),
                    username: username.clone(),
                    password_hash: password_hash.to_string(),
                    created_at: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.username.as_str(), "testuser");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|username, _| {
            Err(UserError::UsernameAlreadyExists(
                username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            password: "password456".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }
}
