//! Serialized error record — the one persisted/transmitted artifact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::code::ErrorCode;

/// Transport-safe projection of an [`AppError`](crate::AppError).
///
/// JSON shape: `{ message, code, correlationId, stack?, cause?, metadata? }`
/// with camelCase keys and optional fields omitted when absent. `stack` is
/// the only diagnostic-grade field; consumers embedding this record in a
/// user-facing response drop it (`record.stack = None`) before serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub message: String,
    pub code: ErrorCode,
    pub correlation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}
