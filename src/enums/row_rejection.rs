use serde::Serialize;
use thiserror::Error;

/// Why a single CSV row was excluded from an import.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RowRejection {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("invalid month '{value}'")]
    InvalidMonth { value: String },

    #[error("invalid year '{value}': expected a four-digit year between {min} and {max}")]
    InvalidYear { value: String, min: i32, max: i32 },

    #[error("'{value}' is not an allowed {field} (expected one of: {allowed})")]
    InvalidEnumValue { field: String, value: String, allowed: String },

    #[error("invalid {field} '{value}': expected a non-negative whole number")]
    InvalidCount { field: String, value: String },

    #[error("malformed record: {message}")]
    Malformed { message: String },
}
