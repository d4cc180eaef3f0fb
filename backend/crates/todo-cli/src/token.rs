//! Local, unverified reading of the caller's access token.
//!
//! The server is the authority; this only lets the CLI refuse requests the
//! server would reject and fill in defaults from the caller's claims.

use crate::{CliClientResult, ClientError};

use todo_auth::{Claims, IdentityContext};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the payload segment of a JWT without checking its signature
pub fn decode_claims(token: &str) -> CliClientResult<Claims> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClientError::token(
            "token must have three dot-separated segments",
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClientError::token(format!("token payload is not base64url: {e}")))?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Build the caller's identity from an unverified token
pub fn identity_from_token(token: &str) -> CliClientResult<IdentityContext> {
    let claims = decode_claims(token)?;
    Ok(IdentityContext::from_claims(&claims)?)
}
