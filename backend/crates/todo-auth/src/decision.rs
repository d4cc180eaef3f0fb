use crate::Policy;

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(reason),
        }
    }
}

/// Why an access check failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Caller holds none of the roles the policy names
    MissingRole(Policy),
    /// Caller's token was not granted the scope
    MissingScope(&'static str),
    /// Target is outside the caller's tenant or visible set.
    /// Reported as not-found so existence never leaks across tenants.
    NotFound,
}

impl DenyReason {
    /// Short label for metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingRole(_) => "missing_role",
            Self::MissingScope(_) => "missing_scope",
            Self::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRole(policy) => write!(f, "caller does not satisfy the {policy} policy"),
            Self::MissingScope(scope) => write!(f, "token is missing the '{scope}' scope"),
            Self::NotFound => write!(f, "todo not found"),
        }
    }
}
