// rest/error.rs — The error taxonomy every REST handler maps into.
//
// Validation and identifier checks run before any store call and short-circuit
// with the specific error. Store faults are downgraded to `Internal` with a
// fixed message; the underlying diagnostic is logged, never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::tasks::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid task ID")]
    InvalidId,
    #[error("Task not found")]
    NotFound,
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::MissingTitle).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("Failed to fetch tasks").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
