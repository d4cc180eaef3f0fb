use crate::tests::{create_test_state, sign};
use crate::{ApiError, Identity};

use todo_core::Role;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use serde_json::json;

async fn extract(header: Option<&str>) -> Result<Identity, ApiError> {
    let state = create_test_state();
    let mut builder = Request::builder().uri("/api/todolist");
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    Identity::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn test_extractor_with_valid_token() {
    let token = sign(json!({
        "tid": "t1",
        "preferred_username": "alice",
        "roles": ["Writer", "Reader"],
        "scp": "ToDo.Read ToDo.Write",
    }));

    let result = extract(Some(&format!("Bearer {token}"))).await;

    let Identity(identity) = result.unwrap();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.tenant_id, "t1");
    assert!(identity.has_role(Role::Writer));
    assert!(identity.has_scope("ToDo.Write"));
}

#[tokio::test]
async fn test_extractor_without_header_is_unauthorized() {
    let result = extract(None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_basic_scheme_is_unauthorized() {
    let result = extract(Some("Basic YWxpY2U6c2VjcmV0")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_garbage_token_is_unauthorized() {
    let result = extract(Some("Bearer not.a.jwt")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_without_tenant_claim_reports_missing_claim() {
    let token = sign(json!({
        "preferred_username": "alice",
        "roles": ["Reader"],
        "scp": "ToDo.Read",
    }));

    let result = extract(Some(&format!("Bearer {token}"))).await;

    match result {
        Err(ApiError::MissingClaim { claim, .. }) => assert_eq!(claim, "tid"),
        Err(other) => panic!("Expected MissingClaim, got {other:?}"),
        Ok(_) => panic!("Expected MissingClaim, got an identity"),
    }
}

#[tokio::test]
async fn test_extractor_falls_back_to_name_claim() {
    let token = sign(json!({
        "tid": "t1",
        "name": "Alice Example",
        "roles": ["Reader"],
    }));

    let result = extract(Some(&format!("Bearer {token}"))).await;

    let Identity(identity) = result.unwrap();
    assert_eq!(identity.username, "Alice Example");
    assert!(identity.scopes.is_empty());
}
