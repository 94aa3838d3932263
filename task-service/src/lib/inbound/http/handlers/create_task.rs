use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<ApiSuccess<CreateTaskResponseData>, ApiError> {
    state
        .task_service
        .create_task(&principal.user.id, CreateTaskCommand { title: body.title })
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskResponseData {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<&Task> for CreateTaskResponseData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}
