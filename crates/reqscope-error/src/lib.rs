//! Correlated error taxonomy.
//!
//! One error value type, [`AppError`], tagged by [`ErrorCode`]. Every
//! instance captures the correlation id of the request that produced it at
//! construction time, through the ambient request context, and flattens to a
//! transport-safe [`ErrorRecord`] for logging and API responses. The
//! taxonomy reports failures; it never retries or recovers — that is the
//! caller's concern.

pub mod code;
pub mod error;
pub mod record;

pub use code::ErrorCode;
pub use error::AppError;
pub use record::ErrorRecord;

/// Result alias for fallible domain operations.
pub type AppResult<T> = Result<T, AppError>;
