//! Axum extractor for the caller's identity

use crate::{ApiError, AppState};

use todo_auth::IdentityContext;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified identity of the caller.
///
/// Validates the `Authorization: Bearer` token and parses its claims. Any
/// failure rejects the request with 401 before the handler runs.
pub struct Identity(pub IdentityContext);

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let identity = state
                .jwt_validator
                .validate_header(header)
                .and_then(|claims| IdentityContext::from_claims(&claims))
                .map_err(|e| {
                    log::warn!("Rejected {} {}: {}", parts.method, parts.uri.path(), e);
                    state.metrics.unauthenticated();
                    ApiError::from(e)
                })?;

            log::debug!("{} authenticated", identity.log_prefix());

            Ok(Identity(identity))
        }
    }
}
