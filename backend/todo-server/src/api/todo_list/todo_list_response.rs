use crate::TodoDto;

use serde::Serialize;

/// List of todos response
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoDto>,
}
