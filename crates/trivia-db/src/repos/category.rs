//! Category repository. Read paths plus the insert used by seeding.

use trivia_core::entities::Category;

use crate::error::DatabaseError;
use crate::helpers::read_count;
use crate::service::TriviaService;

const SELECT_COLS: &str = "id, type";

fn row_to_category(row: &libsql::Row) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

impl TriviaService {
    /// Insert a category and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_category(&self, kind: &str) -> Result<Category, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO categories (type) VALUES (?1) RETURNING id",
                [kind],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;
        tracing::info!(id, kind, "created category");

        Ok(Category {
            id,
            kind: kind.to_string(),
        })
    }

    /// Number of categories in the store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_categories(&self) -> Result<u64, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM categories", ())
            .await?;
        read_count(rows).await
    }

    /// All categories ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM categories ORDER BY id"),
                (),
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    /// Ids of every category currently in the store, ascending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn category_ids(&self) -> Result<Vec<i64>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id FROM categories ORDER BY id", ())
            .await?;

        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<i64>(0)?);
        }
        Ok(ids)
    }

    /// Whether a category with this id exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn category_exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM categories WHERE id = ?1", [id])
            .await?;
        Ok(read_count(rows).await? > 0)
    }
}
