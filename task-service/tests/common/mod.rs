use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenService;
use chrono::Duration;
use chrono::Utc;
use task_service::domain::auth::service::AuthService;
use task_service::domain::task::errors::TaskError;
use task_service::domain::task::models::Task;
use task_service::domain::task::models::TaskId;
use task_service::domain::task::ports::TaskRepository;
use task_service::domain::task::service::TaskService;
use task_service::domain::user::errors::UserError;
use task_service::domain::user::models::User;
use task_service::domain::user::models::UserId;
use task_service::domain::user::models::Username;
use task_service::domain::user::ports::UserRepository;
use task_service::domain::user::service::UserService;
use task_service::inbound::http::router::create_router;

/// Signing secret shared by the spawned app and token helpers.
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-32b!";

/// Test application that spawns the real router on a random port,
/// backed by in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub user_repository: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let task_repository = Arc::new(InMemoryTaskRepository::new());

        let token_service = TokenService::new(TEST_SECRET, Duration::minutes(30));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let task_service = Arc::new(TaskService::new(task_repository));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            token_service,
        ));

        let router = create_router(user_service, task_service, auth_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            user_repository,
        }
    }

    /// Issue a token signed with the app's secret, expiring `ttl` from now.
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> String {
        TokenService::new(TEST_SECRET, ttl)
            .issue(subject)
            .expect("Failed to issue token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the bearer token from a follow-up login.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/users")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let response = self
            .post("/token")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}

/// In-memory credential store with the same uniqueness contract as the
/// Postgres adapter.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Drop a user directly from the store, bypassing the API surface.
    pub fn remove(&self, username: &str) {
        self.users
            .lock()
            .unwrap()
            .retain(|user| user.username.as_str() != username);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &Username, password_hash: &str) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|user| user.username == *username) {
            return Err(UserError::UsernameAlreadyExists(
                username.as_str().to_string(),
            ));
        }

        let user = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            username: username.clone(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.username == *username).cloned())
    }
}

/// In-memory task store, owner-scoped like the Postgres adapter.
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI64,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, owner_id: &UserId, title: &str) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.lock().unwrap();

        let task = Task {
            id: TaskId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            owner_id: *owner_id,
            title: title.to_string(),
            completed: false,
        };
        tasks.push(task.clone());

        Ok(task)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|task| task.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    async fn find_for_owner(
        &self,
        id: &TaskId,
        owner_id: &UserId,
    ) -> Result<Option<Task>, TaskError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .find(|task| task.id == *id && task.owner_id == *owner_id)
            .cloned())
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.lock().unwrap();

        match tasks
            .iter_mut()
            .find(|t| t.id == task.id && t.owner_id == task.owner_id)
        {
            Some(stored) => {
                *stored = task.clone();
                Ok(task)
            }
            None => Err(TaskError::NotFound(task.id.to_string())),
        }
    }

    async fn delete_for_owner(&self, id: &TaskId, owner_id: &UserId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.lock().unwrap();

        let before = tasks.len();
        tasks.retain(|task| !(task.id == *id && task.owner_id == *owner_id));

        if tasks.len() == before {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
