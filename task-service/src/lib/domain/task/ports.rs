use async_trait::async_trait;

use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;

/// Port for task domain service operations.
///
/// Every operation takes the authenticated owner; a task belonging to
/// someone else is indistinguishable from a task that does not exist.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new, uncompleted task for the owner.
    async fn create_task(
        &self,
        owner_id: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// List all tasks belonging to the owner.
    async fn list_tasks(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Apply a partial update to one of the owner's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_task(
        &self,
        owner_id: &UserId,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Delete one of the owner's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_task(&self, owner_id: &UserId, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for the task store.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist a new task, `completed` defaulting to false.
    async fn create(&self, owner_id: &UserId, title: &str) -> Result<Task, TaskError>;

    /// Retrieve all tasks of an owner in insertion order.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Retrieve a task by id, scoped to its owner.
    async fn find_for_owner(
        &self,
        id: &TaskId,
        owner_id: &UserId,
    ) -> Result<Option<Task>, TaskError>;

    /// Update an existing task in storage.
    ///
    /// # Errors
    /// * `NotFound` - No row matched the task id and owner
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove a task, scoped to its owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matched the task id and owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_for_owner(&self, id: &TaskId, owner_id: &UserId) -> Result<(), TaskError>;
}
