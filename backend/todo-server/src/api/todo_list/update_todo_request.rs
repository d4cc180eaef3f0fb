use serde::Deserialize;

/// Request body for updating a todo.
///
/// Omitted fields keep their current values.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// Must match the path id when present
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    /// Accepted for compatibility and ignored; the caller's tenant always wins
    #[serde(default)]
    pub tenant_id: Option<String>,
}
