//! The application error value — one type, tagged by [`ErrorCode`].
//!
//! Construction captures the ambient correlation id through the context
//! accessor, so an error raised anywhere under a request scope is traceable
//! to that request without any parameter threading. Errors are built at the
//! point of detection, optionally re-wrapped (original attached as the
//! cause) when crossing a layer boundary, and flattened exactly once to an
//! [`ErrorRecord`] at the reporting point. Never mutated after construction.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

use serde_json::{Map, Value};

use crate::code::ErrorCode;
use crate::record::ErrorRecord;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A reportable domain error carrying its request's correlation id.
#[derive(Debug)]
pub struct AppError {
    code: ErrorCode,
    message: String,
    correlation_id: String,
    cause: Option<Cause>,
    metadata: Option<Map<String, Value>>,
    backtrace: Backtrace,
}

impl AppError {
    /// Builds an error of the given category, capturing the ambient
    /// correlation id and a backtrace.
    ///
    /// # Panics
    ///
    /// Panics when called outside an active request scope — that is a
    /// boundary wiring defect, and failing fast beats emitting an error
    /// nobody can correlate.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let correlation_id = reqscope_context::accessor::request_id().unwrap_or_default();
        Self {
            code,
            message: message.into(),
            correlation_id,
            cause: None,
            metadata: None,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn argument_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArgumentInvalid, message)
    }

    pub fn argument_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArgumentOutOfRange, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Attaches the originating error when re-wrapping across a boundary.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Attaches non-sensitive diagnostic key/value data.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    /// Flattens to the transport-safe record.
    ///
    /// The cause becomes its full `Display` chain as a single string — live
    /// error objects never cross this boundary, since causes may be
    /// non-serializable or carry sensitive internals. `stack` is present
    /// only when backtrace capture is enabled (`RUST_BACKTRACE` /
    /// `RUST_LIB_BACKTRACE`) and is kept separable so consumers can redact
    /// it before any user-facing output.
    pub fn to_record(&self) -> ErrorRecord {
        let stack = match self.backtrace.status() {
            BacktraceStatus::Captured => Some(self.backtrace.to_string()),
            _ => None,
        };
        ErrorRecord {
            message: self.message.clone(),
            code: self.code,
            correlation_id: self.correlation_id.clone(),
            stack,
            cause: self.cause.as_deref().map(display_chain),
            metadata: self.metadata.clone(),
        }
    }
}

/// Renders an error and its `source()` chain as `"outer: inner: root"`.
fn display_chain(err: &(dyn StdError + Send + Sync)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn StdError + 'static))
    }
}
