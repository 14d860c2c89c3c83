//! Query-layer error type.
//!
//! Components raise the specific kind as soon as a check fails. Anything
//! coming up from the store is an internal error; the detail is logged by
//! the assembler and never reaches the payload.

use thiserror::Error;
use trivia_core::errors::{CoreError, ErrorKind};
use trivia_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed or missing caller input, or a structurally invalid id.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request was well-formed but no matching data exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl QueryError {
    /// The taxonomy kind reported to callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Database(_) => ErrorKind::InternalError,
        }
    }
}

impl From<CoreError> for QueryError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::InvalidId(id) => Self::BadRequest(format!("invalid id '{id}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_are_internal() {
        let err = QueryError::from(DatabaseError::Query("boom".into()));
        assert_eq!(err.kind(), ErrorKind::InternalError);

        let err = QueryError::from(DatabaseError::NoResult);
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        let err = QueryError::from(CoreError::Validation("missing".into()));
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        let err = QueryError::from(CoreError::InvalidId("abc".into()));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
