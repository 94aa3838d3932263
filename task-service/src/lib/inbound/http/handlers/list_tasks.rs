use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::Task;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<ListTaskResponseData>>, ApiError> {
    state
        .task_service
        .list_tasks(&principal.user.id)
        .await
        .map_err(ApiError::from)
        .map(|tasks| {
            ApiSuccess::new(
                StatusCode::OK,
                tasks.iter().map(ListTaskResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTaskResponseData {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<&Task> for ListTaskResponseData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}
