use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Extension type carrying the principal resolved for this request.
///
/// Derived per-request by the gate; never cached across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware guarding protected routes.
///
/// Delegates to the authentication gate and adds the resolved user to
/// request extensions. Every rejection class (missing header, malformed or
/// expired token, vanished subject) produces the same 401 response with a
/// bearer challenge; only internal logs distinguish them.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(unauthenticated_response)?;

    let user = state
        .auth_service
        .authorize(token)
        .await
        .map_err(|e| match e {
            AuthError::DatabaseError(msg) => {
                tracing::error!(error = %msg, "Credential store failure during authorization");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                )
                    .into_response()
            }
            _ => unauthenticated_response(),
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let auth_header = req.headers().get(http::header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ")
}

fn unauthenticated_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(http::header::WWW_AUTHENTICATE, "Bearer")],
        Json(json!({
            "error": "Could not validate credentials"
        })),
    )
        .into_response()
}
