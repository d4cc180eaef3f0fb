
use crate::IdentityContext;

use todo_core::Role;

/// Build an identity directly, bypassing claim parsing
pub(crate) fn identity(
    username: &str,
    tenant_id: &str,
    roles: &[Role],
    scopes: &[&str],
) -> IdentityContext {
    IdentityContext {
        username: username.to_string(),
        tenant_id: tenant_id.to_string(),
        roles: roles.iter().copied().collect(),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
    }
}
