use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the server itself. Failed dispatches are not errors;
/// they are rendered as classified outcomes.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("URL is empty")]
    EmptyUrl,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            AppError::ClientBuild(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CLIENT_BUILD_ERROR"),
            AppError::RequestInFlight => (StatusCode::CONFLICT, "REQUEST_IN_FLIGHT"),
            AppError::EmptyUrl => (StatusCode::BAD_REQUEST, "EMPTY_URL"),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "message": self.to_string(),
                "code": error_code,
            }
        }));

        (status, body).into_response()
    }
}
