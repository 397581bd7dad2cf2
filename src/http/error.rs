//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::repository::RepositoryError;
use crate::services::summary::SummaryError;

/// Error body for internal failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// A query matched zero rows on a route that reports this as 404.
    /// Responds with the bare `{"error": "..."}` body that route promises.
    NoData(String),
    /// Storage-layer failure; surfaces as a generic server error.
    Repository(RepositoryError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NoData(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Repository(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("REPOSITORY_ERROR", e.to_string())),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("INTERNAL_ERROR", msg)),
            )
                .into_response(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

// Summarizing an empty set on an unguarded route is a server-side failure,
// not a 404; only the range route converts emptiness into NoData first.
impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_produces_bare_error_body() {
        let response = AppError::NoData("No data found for the given date range.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn summary_error_maps_to_internal() {
        let err: AppError = SummaryError::EmptyInput.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
