//! Cross-cutting error types and the fixed error taxonomy.
//!
//! Domain-specific errors (`DatabaseError`, `QueryError`) live in their own
//! crates. Every failure the service reports ends up as one [`ErrorKind`],
//! and the payload callers see is always an [`ErrorResponse`] built from that
//! kind alone.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can be raised by any trivia crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller input failed validation (missing field, bad value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An identifier could not be interpreted as an integer id.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// The closed set of failure kinds the boundary layer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalError,
}

impl ErrorKind {
    /// Numeric code carried in the `error` field (mirrors the HTTP status).
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::InternalError => 500,
        }
    }

    /// Static human-readable label.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// `{success: false, error: <code>, message: <label>}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<ErrorKind> for ErrorResponse {
    fn from(kind: ErrorKind) -> Self {
        Self {
            success: false,
            error: kind.status(),
            message: kind.message().to_string(),
        }
    }
}
