use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::TaskId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
) -> Result<ApiSuccess<DeleteTaskResponseData>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(TaskError::from)?;

    state
        .task_service
        .delete_task(&principal.user.id, &task_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteTaskResponseData {
                    message: "Task deleted".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskResponseData {
    pub message: String,
}
