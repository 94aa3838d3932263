use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;

/// Domain service implementation for owner-scoped task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    /// Create a new task service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        owner_id: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        self.repository.create(owner_id, &command.title).await
    }

    async fn list_tasks(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        self.repository.list_by_owner(owner_id).await
    }

    async fn update_task(
        &self,
        owner_id: &UserId,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_for_owner(id, owner_id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        if let Some(new_title) = command.title {
            task.title = new_title;
        }

        if let Some(new_completed) = command.completed {
            task.completed = new_completed;
        }

        self.repository.update(task).await
    }

    async fn delete_task(&self, owner_id: &UserId, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete_for_owner(id, owner_id).await
    }
}
