use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with this id in the requested tenant
    #[error("Todo {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
