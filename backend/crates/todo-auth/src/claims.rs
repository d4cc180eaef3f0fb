use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const TENANT_ID_CLAIM: &str = "tid";
pub const SCOPE_CLAIM: &str = "scp";
pub const USERNAME_CLAIM: &str = "preferred_username";

const MAX_TENANT_ID_LENGTH: usize = 128;

/// JWT Claims structure - matches the identity provider's access token format
///
/// Tenant and scope are optional at this layer so that a token without them
/// still decodes; `IdentityContext::from_claims` turns their absence into a
/// typed error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stable user identifier)
    pub sub: String,
    /// Tenant identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    /// Space-delimited delegated scopes, e.g. "ToDo.Read ToDo.Write"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scp: Option<String>,
    /// Application roles
    #[serde(default)]
    pub roles: Vec<String>,
    /// Sign-in name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref tid) = self.tid
            && tid.len() > MAX_TENANT_ID_LENGTH
        {
            return Err(AuthError::InvalidClaim {
                claim: TENANT_ID_CLAIM.to_string(),
                message: "tid exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Username the way the identity provider presents it: sign-in name,
    /// then display name, then subject.
    pub fn username(&self) -> Option<&str> {
        [
            self.preferred_username.as_deref(),
            self.name.as_deref(),
            Some(self.sub.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
    }
}
