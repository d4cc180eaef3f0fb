use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service and component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let metrics_status = if state.prometheus.is_some() {
        "operational"
    } else {
        "disabled"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": "operational",
            "auth": state.jwt_validator.algorithm(),
            "metrics": metrics_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
///
/// The store is in memory and seeded before the listener binds, so a running
/// server is always ready.
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics_export(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Metrics recorder not installed",
        )
            .into_response(),
    }
}
