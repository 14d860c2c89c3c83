//! Filtered, paginated question listings.

use trivia_core::entities::Question;
use trivia_db::repos::question::QuestionFilter;
use trivia_db::service::TriviaService;

use crate::error::QueryError;
use crate::paginator::{Page, Paginator};

/// Runs one of the fixed predicates against the store and returns a
/// [`Page`] with the predicate's total count.
///
/// The engine only reports what it found. Whether an empty page is a
/// not-found is the caller's decision.
#[derive(Clone, Copy)]
pub struct QuestionFilterEngine<'a> {
    service: &'a TriviaService,
    paginator: Paginator,
}

impl<'a> QuestionFilterEngine<'a> {
    #[must_use]
    pub const fn new(service: &'a TriviaService, paginator: Paginator) -> Self {
        Self { service, paginator }
    }

    /// Every question, ordered by id.
    ///
    /// # Errors
    ///
    /// `BadRequest` for page 0, `Database` on store failure.
    pub async fn all(&self, page: u32) -> Result<Page<Question>, QueryError> {
        self.page(&QuestionFilter::All, page).await
    }

    /// Questions whose category is `category_id`.
    ///
    /// Ids are checked against `[1, category count]` before the question
    /// table is touched. This is a range check over the count, not a lookup.
    ///
    /// # Errors
    ///
    /// `BadRequest` when the id is out of range or the page is 0.
    pub async fn by_category(
        &self,
        category_id: i64,
        page: u32,
    ) -> Result<Page<Question>, QueryError> {
        let count = self.service.count_categories().await?;
        let in_range = u64::try_from(category_id).is_ok_and(|id| id >= 1 && id <= count);
        if !in_range {
            return Err(QueryError::BadRequest(format!(
                "category {category_id} outside 1..={count}"
            )));
        }
        self.page(&QuestionFilter::Category(category_id), page).await
    }

    /// Questions whose text contains `term`, ignoring case. An empty term
    /// matches everything.
    ///
    /// # Errors
    ///
    /// `BadRequest` for page 0, `Database` on store failure.
    pub async fn search(&self, term: &str, page: u32) -> Result<Page<Question>, QueryError> {
        self.page(&QuestionFilter::Search(term.to_string()), page)
            .await
    }

    async fn page(&self, filter: &QuestionFilter, page: u32) -> Result<Page<Question>, QueryError> {
        let window = self.paginator.window(page)?;
        let total = self.service.count_questions(filter).await?;
        let items = self
            .service
            .list_questions(filter, window.offset, window.limit)
            .await?;
        Ok(Page {
            items,
            total,
            page,
            page_size: self.paginator.page_size(),
        })
    }
}
