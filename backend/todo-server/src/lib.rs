pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod jwt;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::Identity,
    todo_list::{
        create_todo_request::CreateTodoRequest,
        todo_dto::TodoDto,
        todo_list::{create_todo, delete_todo, get_todo, list_todos, update_todo},
        todo_list_response::TodoListResponse,
        todo_response::TodoResponse,
        update_todo_request::UpdateTodoRequest,
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;

pub use crate::routes::build_router;
