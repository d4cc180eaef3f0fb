pub mod new_todo;
pub mod role;
pub mod scope;
pub mod todo;
