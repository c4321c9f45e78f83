//! Error codes — stable category identifiers for the error taxonomy.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Category of an [`AppError`](crate::AppError).
///
/// The wire string of each code is a public contract — log queries and
/// client error handling key on it — so renaming one is a breaking change.
/// New categories are added as new variants with new strings; existing
/// variants are never repurposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ArgumentInvalid,
    ArgumentOutOfRange,
    Conflict,
    NotFound,
    Internal,
}

impl ErrorCode {
    /// Stable wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArgumentInvalid => "ARGUMENT_INVALID",
            Self::ArgumentOutOfRange => "ARGUMENT_OUT_OF_RANGE",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Parses a wire identifier back to its code.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "ARGUMENT_INVALID" => Some(Self::ArgumentInvalid),
            "ARGUMENT_OUT_OF_RANGE" => Some(Self::ArgumentOutOfRange),
            "CONFLICT" => Some(Self::Conflict),
            "NOT_FOUND" => Some(Self::NotFound),
            "INTERNAL_SERVER_ERROR" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_wire(&s).ok_or_else(|| de::Error::custom(format!("unknown error code: {s}")))
    }
}
