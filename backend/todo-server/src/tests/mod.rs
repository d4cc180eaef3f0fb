mod api;

use crate::{AppState, Metrics};

use todo_auth::{AccessEvaluator, JwtValidator};
use todo_config::ValidationConfig;
use todo_store::TodoStore;

use std::sync::Arc;

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

pub(crate) const TEST_SECRET: &str = "unit-test-secret-that-is-32-chars!";

pub(crate) fn create_test_state() -> AppState {
    AppState {
        store: TodoStore::new(),
        evaluator: AccessEvaluator::default(),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        metrics: Metrics::new(),
        prometheus: None,
        validation: ValidationConfig::default(),
    }
}

/// Sign a claim set with the test secret, adding `sub` and `exp`
pub(crate) fn sign(mut claims: Value) -> String {
    claims["sub"] = json!("subject-1");
    claims["exp"] = json!(chrono::Utc::now().timestamp() + 3600);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
