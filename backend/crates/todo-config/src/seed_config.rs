use crate::{ConfigError, ConfigErrorResult};

use todo_core::{NewTodo, Todo};

use serde::Deserialize;

/// Records inserted into the store at startup, in file order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub todos: Vec<SeedTodo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTodo {
    pub title: String,
    pub owner: String,
    pub tenant_id: String,
}

impl SeedConfig {
    pub fn validate(&self, max_title_length: usize) -> ConfigErrorResult<()> {
        for (index, todo) in self.todos.iter().enumerate() {
            Todo::normalize_title(&todo.title, max_title_length)
                .map_err(|e| ConfigError::seed(format!("seed.todos[{index}]: {e}")))?;

            if todo.owner.trim().is_empty() {
                return Err(ConfigError::seed(format!(
                    "seed.todos[{index}]: owner cannot be empty"
                )));
            }
            if todo.tenant_id.trim().is_empty() {
                return Err(ConfigError::seed(format!(
                    "seed.todos[{index}]: tenant_id cannot be empty"
                )));
            }
        }

        Ok(())
    }

    /// Seed records ready for the store. Call after `validate`.
    pub fn new_todos(&self) -> Vec<NewTodo> {
        self.todos
            .iter()
            .map(|todo| NewTodo::new(todo.title.trim(), todo.owner.trim(), todo.tenant_id.trim()))
            .collect()
    }
}
