//! Delegated permission scopes exposed by the todo list API.

/// Read todos
pub const TODO_READ: &str = "ToDo.Read";

/// Create, edit and delete todos
pub const TODO_WRITE: &str = "ToDo.Write";
