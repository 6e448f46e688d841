use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned by a panicked writer")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum AddListError {
    #[error("list references unknown cards: {0:?}")]
    UnknownCards(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors a handler can return. Client errors render their final response
/// here; `Internal` is rewritten by the error responder according to the
/// environment.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid data")]
    InvalidData,
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidData => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidData => HttpResponse::BadRequest().body("Invalid data"),
            ApiError::NotFound(message) => HttpResponse::NotFound().body(*message),
            ApiError::Internal(_) => {
                let body = json!({ "error": { "message": "server error" } });
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
