use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// HTTP request body for updating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<ApiSuccess<UpdateTaskResponseData>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(TaskError::from)?;

    let command = UpdateTaskCommand {
        title: body.title,
        completed: body.completed,
    };

    state
        .task_service
        .update_task(&principal.user.id, &task_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::OK, task.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskResponseData {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<&Task> for UpdateTaskResponseData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}
