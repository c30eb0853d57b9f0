use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Boundary conversion: every error leaves the process as a status code
/// plus a `{"message": ...}` body and propagates no further.
#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.current_context() {
            KernelError::Validation | KernelError::MalformedBody => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The most recent String attachment carries the user-facing
        // message; the context text is the fallback.
        let message = self
            .0
            .frames()
            .find_map(|frame| frame.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| self.0.current_context().to_string());

        tracing::debug!("request rejected: {:?}", self.0);

        (status, Json(ErrorMessage { message })).into_response()
    }
}
