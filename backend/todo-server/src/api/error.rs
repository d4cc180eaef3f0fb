//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use todo_auth::{AuthError, DenyReason};
use todo_core::CoreError;
use todo_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending field or claim, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable credentials, or the caller lacks a role or scope (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Token verified but a required claim is absent (401)
    #[error("Missing claim '{claim}' {location}")]
    MissingClaim {
        claim: String,
        location: ErrorLocation,
    },

    /// Resource not found, or not visible to the caller (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } | Self::MissingClaim { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 500 that says nothing about the cause; log the cause before calling
    #[track_caller]
    pub fn internal() -> Self {
        ApiError::Internal {
            message: "Internal server error".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn todo_not_found(id: i64) -> Self {
        ApiError::NotFound {
            message: format!("Todo {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::MissingClaim { claim, .. } => ApiErrorBody {
                code: "MISSING_CLAIM".into(),
                message: format!("Missing claim '{}'", claim),
                field: Some(claim),
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Token and claim failures. Never echoes token contents.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingClaim { claim, .. } => ApiError::MissingClaim {
                claim,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Unauthorized {
                message: other.public_message(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Access-control denials
impl From<DenyReason> for ApiError {
    #[track_caller]
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::NotFound => ApiError::NotFound {
                message: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DenyReason::MissingRole(_) | DenyReason::MissingScope(_) => ApiError::Unauthorized {
                message: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id, .. } => ApiError::todo_not_found(id),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Unexpected core error: {}", other);
                ApiError::internal()
            }
        }
    }
}

/// Request bodies that cannot be read or decoded.
///
/// Client mistakes (syntax, missing fields, content type) are validation
/// errors; a failure to buffer the body on our side is internal.
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status().is_server_error() {
            log::error!("Failed to read request body: {}", rejection.body_text());
            ApiError::internal()
        } else {
            ApiError::Validation {
                message: rejection.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
