use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quillpad_core::post::PostError;
use quillpad_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error type that wraps `anyhow::Error`.
///
/// The response status is derived from the wrapped error: validation
/// failures are 422, repository errors map through
/// `repository_error_to_status_code`, anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if self.0.downcast_ref::<PostError>().is_some() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
        } else {
            tracing::debug!(error = %self.0, status = %status_code, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
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
