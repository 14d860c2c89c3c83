//! # trivia-db
//!
//! libSQL store for the trivia service.
//!
//! Holds the two relational tables (categories and questions) and exposes
//! the primitives the query layer builds on: count, filter, order,
//! paginate, and full candidate-set reads for random sampling. Writes run
//! inside libSQL transactions; this crate adds no locking of its own.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and connection. Repository methods live on
/// [`service::TriviaService`].
pub struct TriviaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TriviaDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let trivia_db = Self { db, conn };
        trivia_db.run_migrations().await?;
        tracing::debug!(path, "opened trivia database");
        Ok(trivia_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
