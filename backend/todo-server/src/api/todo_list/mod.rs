pub mod create_todo_request;
pub mod todo_dto;
#[allow(clippy::module_inception)]
pub mod todo_list;
pub mod todo_list_response;
pub mod todo_response;
pub mod update_todo_request;
