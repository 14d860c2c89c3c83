//! Bootstrapping a store: standard categories and JSON-lines question import.

use std::collections::BTreeSet;
use std::path::Path;

use trivia_core::entities::NewQuestion;
use trivia_core::ids::SEED_CATEGORIES;
use trivia_core::requests::CreateQuestionRequest;
use trivia_core::responses::{ImportResponse, SeedResponse};
use trivia_db::service::TriviaService;

use crate::error::QueryError;

pub struct Seeder;

impl Seeder {
    /// Insert the six standard categories into an empty store. A store that
    /// already has categories is left alone.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Database` if a write fails.
    pub async fn seed_categories(service: &TriviaService) -> Result<SeedResponse, QueryError> {
        let existing = service.count_categories().await?;
        if existing > 0 {
            tracing::info!(existing, "categories already present, skipping seed");
            return Ok(SeedResponse {
                success: true,
                categories_created: 0,
            });
        }

        let mut categories_created = 0u32;
        for kind in SEED_CATEGORIES {
            service.create_category(kind).await?;
            categories_created += 1;
        }
        tracing::info!(categories_created, "seeded categories");
        Ok(SeedResponse {
            success: true,
            categories_created,
        })
    }

    /// Read one `{question, answer, category, difficulty}` object per line
    /// and insert them all in a single transaction.
    ///
    /// Nothing is written unless every line parses, validates, and names an
    /// existing category.
    ///
    /// # Errors
    ///
    /// `BadRequest` for an unreadable file or any invalid line (the message
    /// carries the 1-based line number), `Database` if the insert fails.
    pub async fn import_questions(
        service: &TriviaService,
        path: &Path,
    ) -> Result<ImportResponse, QueryError> {
        let batch = read_batch(path)?;

        let known: BTreeSet<i64> = service.category_ids().await?.into_iter().collect();
        if let Some((line, q)) = batch
            .iter()
            .enumerate()
            .find(|(_, q)| !known.contains(&q.category))
        {
            return Err(QueryError::BadRequest(format!(
                "line {}: unknown category {}",
                line + 1,
                q.category
            )));
        }

        let created = service.import_questions(&batch).await?;
        let imported = u32::try_from(created.len()).unwrap_or(u32::MAX);
        tracing::debug!(imported, path = %path.display(), "import file applied");
        Ok(ImportResponse {
            success: true,
            imported,
            created,
        })
    }
}

fn read_batch(path: &Path) -> Result<Vec<NewQuestion>, QueryError> {
    let lines = serde_jsonlines::json_lines::<CreateQuestionRequest, _>(path).map_err(|e| {
        QueryError::BadRequest(format!("cannot read {}: {e}", path.display()))
    })?;

    lines
        .enumerate()
        .map(|(idx, line)| {
            let request = line
                .map_err(|e| QueryError::BadRequest(format!("line {}: {e}", idx + 1)))?;
            request
                .into_new_question()
                .map_err(|e| QueryError::BadRequest(format!("line {}: {e}", idx + 1)))
        })
        .collect()
}
