use crate::Todo;

use serde::{Deserialize, Serialize};

/// A todo that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub owner: String,
    pub tenant_id: String,
}

impl NewTodo {
    pub fn new(
        title: impl Into<String>,
        owner: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            owner: owner.into(),
            tenant_id: tenant_id.into(),
        }
    }

    pub fn with_id(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            owner: self.owner,
            tenant_id: self.tenant_id,
        }
    }
}
