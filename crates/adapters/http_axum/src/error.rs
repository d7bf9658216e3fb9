//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scoreboard_domain::error::ScoreboardError;

/// JSON error body returned by API endpoints.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

/// Maps [`ScoreboardError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ScoreboardError);

impl From<ScoreboardError> for ApiError {
    fn from(err: ScoreboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            ScoreboardError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: err.to_string(),
                    kind: err.kind().as_str(),
                    field: Some(err.field()),
                },
            ),
            ScoreboardError::InvalidState(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: err.to_string(),
                    kind: "INVALID_MATCH_STATE",
                    field: None,
                },
            ),
            ScoreboardError::AlreadyInProgress(err) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: err.to_string(),
                    kind: "MATCH_ALREADY_IN_PROGRESS",
                    field: None,
                },
            ),
            ScoreboardError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: err.to_string(),
                    kind: "MATCH_NOT_FOUND",
                    field: None,
                },
            ),
            ScoreboardError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        kind: "INTERNAL",
                        field: None,
                    },
                )
            }
        };

        if status.is_client_error() {
            tracing::debug!(
                status = %status,
                kind = body.kind,
                error = %body.error,
                "request rejected"
            );
        }
        (status, Json(body)).into_response()
    }
}
