use crate::claims::{TENANT_ID_CLAIM, USERNAME_CLAIM};
use crate::{AuthError, Claims, Result as AuthErrorResult};

use todo_core::Role;

use std::collections::BTreeSet;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Identity of the caller, derived from verified token claims.
///
/// Built fresh for every request; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    pub username: String,
    pub tenant_id: String,
    pub roles: BTreeSet<Role>,
    pub scopes: BTreeSet<String>,
}

impl IdentityContext {
    /// Parse the identity out of a claim set.
    ///
    /// A missing tenant or username is a `MissingClaim` error. A missing scope
    /// claim yields an empty scope set and role strings outside the known
    /// roles are dropped.
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        let tenant_id = claims
            .tid
            .as_deref()
            .map(str::trim)
            .filter(|tid| !tid.is_empty())
            .ok_or_else(|| AuthError::MissingClaim {
                claim: TENANT_ID_CLAIM.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let username = claims
            .username()
            .ok_or_else(|| AuthError::MissingClaim {
                claim: USERNAME_CLAIM.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let scopes = claims
            .scp
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();

        let roles = claims
            .roles
            .iter()
            .filter_map(|value| match Role::from_str(value) {
                Ok(role) => Some(role),
                Err(_) => {
                    log::debug!("Ignoring unknown role '{}' for {}", value, username);
                    None
                }
            })
            .collect();

        Ok(Self {
            username,
            tenant_id,
            roles,
            scopes,
        })
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Short description for log lines (never includes token material)
    pub fn log_prefix(&self) -> String {
        format!("[tenant={} user={}]", self.tenant_id, self.username)
    }
}
