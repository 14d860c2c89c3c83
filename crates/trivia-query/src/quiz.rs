//! Random question selection for quiz rounds.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use trivia_core::entities::Question;
use trivia_core::requests::{CategoryScope, QuizRequest};
use trivia_db::service::TriviaService;

use crate::error::QueryError;

/// Draws one not-yet-asked question uniformly at random.
///
/// The random source is injectable so tests can use a seeded generator.
pub struct QuizSelector<'a, R = StdRng> {
    service: &'a TriviaService,
    rng: R,
}

impl<'a> QuizSelector<'a, StdRng> {
    /// Selector backed by an entropy-seeded generator.
    #[must_use]
    pub fn new(service: &'a TriviaService) -> Self {
        Self::with_rng(service, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> QuizSelector<'a, R> {
    #[must_use]
    pub fn with_rng(service: &'a TriviaService, rng: R) -> Self {
        Self { service, rng }
    }

    /// Validate a raw quiz request and draw from it.
    ///
    /// # Errors
    ///
    /// `BadRequest` if `previous_questions` or `quiz_category` (or its id) is
    /// missing, `NotFound` when no eligible question remains.
    pub async fn select(&mut self, request: &QuizRequest) -> Result<Question, QueryError> {
        let previous = request.previous_questions.as_deref().ok_or_else(|| {
            QueryError::BadRequest("missing required field 'previous_questions'".into())
        })?;
        let scope = request
            .quiz_category
            .as_ref()
            .ok_or_else(|| QueryError::BadRequest("missing required field 'quiz_category'".into()))?
            .scope()?;
        self.draw(previous, scope).await
    }

    /// Pick one question in `scope` whose id is not in `previous`.
    ///
    /// Duplicates in `previous` are ignored. Ids that do not exist are
    /// harmless. The scope is read in one query and exclusion plus the pick
    /// happen in memory, so `previous` can be arbitrarily long and the
    /// returned question is always a full row.
    ///
    /// # Errors
    ///
    /// `NotFound` when the scope is exhausted or empty.
    pub async fn draw(
        &mut self,
        previous: &[i64],
        scope: CategoryScope,
    ) -> Result<Question, QueryError> {
        let category_ids = self.resolve_scope(scope).await?;
        let excluded: BTreeSet<i64> = previous.iter().copied().collect();

        let mut candidates = self.service.candidate_questions(&category_ids).await?;
        candidates.retain(|question| !excluded.contains(&question.id));

        let picked = candidates.choose(&mut self.rng).cloned().ok_or_else(|| {
            QueryError::NotFound(format!(
                "no questions left in {scope:?} after excluding {}",
                excluded.len()
            ))
        })?;
        tracing::debug!(id = picked.id, remaining = candidates.len() - 1, "drew quiz question");
        Ok(picked)
    }

    /// The category ids a scope covers. "All" is read from the store at
    /// draw time so categories added later are included.
    async fn resolve_scope(&self, scope: CategoryScope) -> Result<Vec<i64>, QueryError> {
        match scope {
            CategoryScope::All => Ok(self.service.category_ids().await?),
            CategoryScope::Only(id) => Ok(vec![id]),
        }
    }
}
