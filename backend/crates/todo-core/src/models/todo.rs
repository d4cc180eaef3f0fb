//! Todo entity - a single item of a tenant's todo list.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// A todo item.
///
/// Every todo belongs to exactly one tenant. The id is assigned by the store
/// and is unique across all tenants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    /// Username of the owner (the creator unless an admin assigned someone else)
    pub owner: String,
    pub tenant_id: String,
}

impl Todo {
    /// Check if this todo lives in the given tenant
    pub fn belongs_to(&self, tenant_id: &str) -> bool {
        self.tenant_id == tenant_id
    }

    /// Check if this todo is owned by the given user
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner == username
    }

    /// Trim a user-supplied title and check it against the length limit.
    #[track_caller]
    pub fn normalize_title(raw: &str, max_length: usize) -> CoreErrorResult<String> {
        let title = raw.trim();

        if title.is_empty() {
            return Err(CoreError::validation("title", "title cannot be empty"));
        }

        let length = title.chars().count();
        if length > max_length {
            return Err(CoreError::validation(
                "title",
                format!("title exceeds maximum length of {max_length} characters ({length})"),
            ));
        }

        Ok(title.to_string())
    }
}
