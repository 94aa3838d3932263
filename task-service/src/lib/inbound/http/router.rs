use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_task::create_task;
use super::handlers::delete_task::delete_task;
use super::handlers::list_tasks::list_tasks;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::handlers::update_task::update_task;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::task::ports::TaskServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub task_service: Arc<dyn TaskServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    task_service: Arc<dyn TaskServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        task_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/users", post(register_user))
        .route("/token", post(login));

    let protected_routes = Router::new()
        .route("/tasks", post(create_task).get(list_tasks))
        .route("/tasks/:task_id", patch(update_task))
        .route("/tasks/:task_id", delete(delete_task))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
