use todo_core::Todo;

/// Which of a tenant's todos a caller may list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Every todo in the tenant
    Tenant { tenant_id: String },
    /// Only the caller's own todos in the tenant
    Owner { tenant_id: String, username: String },
}

impl Visibility {
    pub fn tenant_id(&self) -> &str {
        match self {
            Self::Tenant { tenant_id } | Self::Owner { tenant_id, .. } => tenant_id,
        }
    }

    pub fn admits(&self, todo: &Todo) -> bool {
        match self {
            Self::Tenant { tenant_id } => todo.belongs_to(tenant_id),
            Self::Owner {
                tenant_id,
                username,
            } => todo.belongs_to(tenant_id) && todo.is_owned_by(username),
        }
    }
}
