use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo title (required)
    pub title: String,

    /// Owner username. Honoured for admins only.
    #[serde(default)]
    pub owner: Option<String>,
}
