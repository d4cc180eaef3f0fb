#![allow(dead_code)]

//! Test infrastructure for todo-server API tests

use todo_auth::{AccessEvaluator, JwtValidator};
use todo_config::ValidationConfig;
use todo_core::NewTodo;
use todo_server::{AppState, Metrics, build_router};
use todo_store::TodoStore;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-32-chars!!";

pub const TENANT_1: &str = "t1";
pub const TENANT_2: &str = "t2";

pub const READ: &str = "ToDo.Read";
pub const WRITE: &str = "ToDo.Write";

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with(AccessEvaluator::default())
}

pub fn create_test_app_state_with(evaluator: AccessEvaluator) -> AppState {
    AppState {
        store: TodoStore::new(),
        evaluator,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        metrics: Metrics::new(),
        prometheus: None,
        validation: ValidationConfig::default(),
    }
}

/// Mint an HS256 access token
pub fn token(username: &str, tenant_id: &str, roles: &[&str], scopes: &[&str]) -> String {
    let claims = json!({
        "sub": format!("sub-{username}"),
        "tid": tenant_id,
        "preferred_username": username,
        "roles": roles,
        "scp": scopes.join(" "),
        "exp": chrono::Utc::now().timestamp() + 3600,
        "iat": chrono::Utc::now().timestamp(),
    });

    sign(&claims)
}

pub fn sign(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn reader(username: &str, tenant_id: &str) -> String {
    token(username, tenant_id, &["Reader"], &[READ])
}

pub fn writer(username: &str, tenant_id: &str) -> String {
    token(username, tenant_id, &["Writer"], &[READ, WRITE])
}

pub fn admin(username: &str, tenant_id: &str) -> String {
    token(username, tenant_id, &["Admin"], &[READ, WRITE])
}

/// Insert a todo directly, bypassing access control
pub async fn seed_todo(state: &AppState, title: &str, owner: &str, tenant_id: &str) -> i64 {
    state
        .store
        .create(NewTodo::new(title, owner, tenant_id))
        .await
        .id
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_raw(
        state,
        method,
        uri,
        bearer,
        body.map(|json| json.to_string()).as_deref(),
    )
    .await
}

/// Like `send`, but the body is sent verbatim as `application/json`
pub async fn send_raw(
    state: &AppState,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(raw) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
