pub mod error;
pub mod todo_store;

pub use error::{Result, StoreError};
pub use todo_store::TodoStore;
