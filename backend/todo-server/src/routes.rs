use crate::{AppState, create_todo, delete_todo, get_todo, health, list_todos, update_todo};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Todo list API (bearer token required)
        .route("/api/todolist", get(list_todos).post(create_todo))
        .route(
            "/api/todolist/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_export))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
