use crate::ApiError;

use todo_auth::{AuthError, DenyReason, Policy};
use todo_core::CoreError;
use todo_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Todo 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Todo 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Token expired".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_missing_claim_returns_401_naming_the_claim() {
    let error = ApiError::MissingClaim {
        claim: "tid".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_CLAIM");
    assert_eq!(json["error"]["field"], "tid");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "unexpected".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_missing_claim_auth_error_converts_to_missing_claim() {
    let auth_err = AuthError::MissingClaim {
        claim: "preferred_username".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(auth_err) {
        ApiError::MissingClaim { claim, .. } => assert_eq!(claim, "preferred_username"),
        other => panic!("Expected MissingClaim, got {other:?}"),
    }
}

#[test]
fn test_other_auth_errors_convert_to_unauthorized_without_location() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(auth_err) {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "Token expired");
            assert!(!message.contains(".rs"));
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_deny_reasons_map_to_status_codes() {
    let missing_role = ApiError::from(DenyReason::MissingRole(Policy::Writers));
    let missing_scope = ApiError::from(DenyReason::MissingScope("ToDo.Write"));
    let not_found = ApiError::from(DenyReason::NotFound);

    assert_eq!(missing_role.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(missing_scope.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_store_not_found_converts_to_not_found() {
    let api_err: ApiError = StoreError::not_found(42).into();

    match api_err {
        ApiError::NotFound { message, .. } => assert!(message.contains("42")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_core_validation_converts_to_validation_with_field() {
    let api_err: ApiError = CoreError::validation("title", "title cannot be empty").into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "title cannot be empty");
            assert_eq!(field.as_deref(), Some("title"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_core_error_converts_to_internal_without_detail() {
    let api_err: ApiError = CoreError::InvalidRole {
        value: "Owner".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(api_err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}
