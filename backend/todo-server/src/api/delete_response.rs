use serde::Serialize;

/// Response for a delete. Sent whether or not a record was removed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
