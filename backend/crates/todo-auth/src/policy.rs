use crate::IdentityContext;

use todo_core::Role;

/// Named role requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Any of Reader, Writer, Admin
    Readers,
    /// Any of Writer, Admin
    Writers,
}

impl Policy {
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Self::Readers => &[Role::Reader, Role::Writer, Role::Admin],
            Self::Writers => &[Role::Writer, Role::Admin],
        }
    }

    pub fn is_satisfied_by(&self, identity: &IdentityContext) -> bool {
        identity.has_any_role(self.roles())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Readers => "Readers",
            Self::Writers => "Writers",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
