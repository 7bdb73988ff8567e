use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use entryd_core::entry::ValidationError;
use entryd_core::storage::{
    repository_error_to_status_code, validation_error_to_status_code, RepositoryError,
};

/// Error returned by every handler.
///
/// Client errors carry their own message. Server errors are logged and
/// answered with a generic body.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(validation_error) = self.0.downcast_ref::<ValidationError>() {
            validation_error_to_status_code(validation_error)
        } else if self.0.is::<JsonRejection>() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn message(&self) -> String {
        if let Some(RepositoryError::NotFound { .. }) = self.0.downcast_ref::<RepositoryError>() {
            return "Entry not found".to_string();
        }
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return format!("Invalid JSON body: {}", rejection.body_text());
        }
        self.0.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = if status_code.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed");
            "Internal server error".to_string()
        } else {
            let message = self.message();
            tracing::warn!(status = %status_code, message = %message, "API error");
            message
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
