//! Error responses — the single reporting point for domain errors.
//!
//! Handlers return `Result<_, ApiError>`; `?` lifts an
//! [`AppError`] into the wrapper, and conversion to a response logs the full
//! record (backtrace included) exactly once, then answers with the record
//! minus `stack` — diagnostics never reach end users.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reqscope_error::{AppError, ErrorCode};
use tracing::{debug, error};

/// Response wrapper for [`AppError`] (foreign-trait impls live here, not in
/// the taxonomy crate, which stays transport-free).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for each error category.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ArgumentInvalid | ErrorCode::ArgumentOutOfRange => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code());
        let mut record = self.0.to_record();

        error!(
            code = record.code.as_str(),
            correlation_id = %record.correlation_id,
            cause = record.cause.as_deref(),
            "request failed: {}",
            record.message,
        );
        if let Some(stack) = record.stack.take() {
            debug!(correlation_id = %record.correlation_id, "error backtrace:\n{stack}");
        }

        (status, Json(record)).into_response()
    }
}
