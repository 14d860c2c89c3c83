//! Service layer owning the store handle.
//!
//! `TriviaService` wraps `TriviaDb`. All repository methods are implemented
//! as `impl TriviaService` blocks under [`crate::repos`]. Components in the
//! query layer borrow a `&TriviaService`; there is no process-wide handle.

use crate::TriviaDb;
use crate::error::DatabaseError;

pub struct TriviaService {
    db: TriviaDb,
}

impl TriviaService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TriviaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TriviaDb {
        &self.db
    }
}
