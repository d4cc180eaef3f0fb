pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::new_todo::NewTodo;
pub use models::role::Role;
pub use models::scope::{TODO_READ, TODO_WRITE};
pub use models::todo::Todo;

#[cfg(test)]
mod tests;
