use std::fmt;

use crate::domain::user::models::UserId;
use crate::task::errors::TaskIdError;

/// Task entity, always scoped to its owner.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Task unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Parse a task ID from its path representation.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer id
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        s.parse::<i64>()
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new task for the authenticated owner.
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: String,
}

/// Command to update an existing task with optional fields.
///
/// Only provided fields are changed.
#[derive(Debug)]
pub struct UpdateTaskCommand {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
