use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use civic_intel::IntelError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// Errors originating from `civic-intel`.
    Intel(IntelError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<IntelError> for AppError {
    fn from(err: IntelError) -> Self {
        AppError::Intel(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Intel(err) => {
                error!("IntelError: {:?}", err);
                match err {
                    IntelError::EmptyPrompt | IntelError::InvalidSchema(_) => {
                        (StatusCode::BAD_REQUEST, err.to_string())
                    }
                    IntelError::MissingProvider(_) | IntelError::ReqwestClientBuild(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    err if err.is_upstream() => (StatusCode::BAD_GATEWAY, err.to_string()),
                    err => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
