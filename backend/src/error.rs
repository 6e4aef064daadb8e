//! Error taxonomy of the tracking services.
//!
//! Every service function answers `Result<_, ServiceError>`; the actix
//! integration below turns the variants into the HTTP statuses of the API
//! contract. Duplicate link creation is deliberately NOT an error anywhere
//! in this crate: bulk creation absorbs duplicates silently and reports
//! only the rows it actually inserted.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or empty required input (no search criterion, blank type
    /// name, empty lot/tag lists).
    #[error("{0}")]
    Validation(String),

    /// A referenced type or link id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Only raised by the lot edit when the new value would collide with
    /// an existing `(tag_id, type_id, lot)` triple.
    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
