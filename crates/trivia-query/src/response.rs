//! Turns operation results into status/body pairs.

use serde::Serialize;
use serde_json::Value;
use trivia_core::errors::{ErrorKind, ErrorResponse};

use crate::error::QueryError;

/// What a boundary layer sends back: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Builds [`Reply`] values. Success bodies are the operation payload; every
/// failure body is the uniform error envelope with no internal detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Status 200 with the serialized payload.
    #[must_use]
    pub fn success<T: Serialize>(payload: &T) -> Reply {
        match serde_json::to_value(payload) {
            Ok(body) => Reply { status: 200, body },
            Err(error) => {
                tracing::error!(%error, "failed to serialize response payload");
                Self::failure(ErrorKind::InternalError)
            }
        }
    }

    /// The error envelope for `kind`.
    #[must_use]
    pub fn failure(kind: ErrorKind) -> Reply {
        let envelope = ErrorResponse::from(kind);
        Reply {
            status: kind.status(),
            body: serde_json::json!({
                "success": envelope.success,
                "error": envelope.error,
                "message": envelope.message,
            }),
        }
    }

    /// Map an operation result to a reply, logging the failure detail.
    #[must_use]
    pub fn assemble<T: Serialize>(result: Result<T, QueryError>) -> Reply {
        match result {
            Ok(payload) => Self::success(&payload),
            Err(error) => {
                let kind = error.kind();
                if kind == ErrorKind::InternalError {
                    tracing::error!(%error, "request failed");
                } else {
                    tracing::warn!(%error, status = kind.status(), "request rejected");
                }
                Self::failure(kind)
            }
        }
    }
}
