use crate::TodoDto;

use serde::Serialize;

/// Single todo response
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub todo: TodoDto,
}
