use actix::MailboxError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::types::dtos::ValidationError;
use serde::Serialize;
use thiserror::Error;

pub const RETRIEVAL_FAILURE_MESSAGE: &str = "Failed to fetch restaurants";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read restaurants file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse restaurants file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("restaurant storage unavailable: {0}")]
    Unavailable(String),
    #[error("restaurant storage unreachable: {0}")]
    Unreachable(#[from] MailboxError),
}

/// Every way a nearby search can fail. All of them end the request.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to fetch restaurants: {0}")]
    Retrieval(#[from] StorageError),
    #[error("Internal server error: {0}")]
    Unexpected(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            SearchError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: err.to_string(),
                    details: None,
                },
            ),
            // the storage cause is logged, never returned
            SearchError::Retrieval(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: RETRIEVAL_FAILURE_MESSAGE.to_string(),
                    details: None,
                },
            ),
            SearchError::Unexpected(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: INTERNAL_FAILURE_MESSAGE.to_string(),
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
