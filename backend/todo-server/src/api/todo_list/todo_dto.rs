use todo_core::Todo;

use serde::{Deserialize, Serialize};

/// Todo DTO for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub owner: String,
    pub tenant_id: String,
}

impl From<Todo> for TodoDto {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            owner: t.owner,
            tenant_id: t.tenant_id,
        }
    }
}
