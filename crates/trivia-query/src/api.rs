//! `TriviaApi`: one method per boundary operation, each returning a [`Reply`].
//!
//! A boundary layer (HTTP router, CLI) parses the route and body, calls the
//! matching method, and sends the reply as-is.

use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use trivia_core::entities::Question;
use trivia_core::requests::{CreateQuestionRequest, QuizRequest, SearchRequest, page_number};
use trivia_core::responses::{
    CategoriesResponse, CategoryQuestionsResponse, QuestionCreatedResponse,
    QuestionDeletedResponse, QuestionResponse, QuestionsResponse, category_map,
};
use trivia_db::error::DatabaseError;
use trivia_db::service::TriviaService;

use crate::error::QueryError;
use crate::filter::QuestionFilterEngine;
use crate::paginator::{Page, Paginator};
use crate::quiz::QuizSelector;
use crate::response::{Reply, ResponseAssembler};
use crate::seed::Seeder;

/// Parse a raw JSON request body. Malformed JSON is a bad request.
///
/// # Errors
///
/// Returns `QueryError::BadRequest` if the body is not valid JSON for `T`.
pub fn parse_body<T: DeserializeOwned>(raw: &str) -> Result<T, QueryError> {
    serde_json::from_str(raw).map_err(|e| QueryError::BadRequest(format!("malformed body: {e}")))
}

pub struct TriviaApi<'a, R = StdRng> {
    service: &'a TriviaService,
    paginator: Paginator,
    selector: QuizSelector<'a, R>,
}

impl<'a> TriviaApi<'a, StdRng> {
    #[must_use]
    pub fn new(service: &'a TriviaService, paginator: Paginator) -> Self {
        Self {
            service,
            paginator,
            selector: QuizSelector::new(service),
        }
    }
}

impl<'a, R: Rng> TriviaApi<'a, R> {
    /// Facade with a caller-supplied random source for quiz draws.
    #[must_use]
    pub fn with_rng(service: &'a TriviaService, paginator: Paginator, rng: R) -> Self {
        Self {
            service,
            paginator,
            selector: QuizSelector::with_rng(service, rng),
        }
    }

    fn engine(&self) -> QuestionFilterEngine<'a> {
        QuestionFilterEngine::new(self.service, self.paginator)
    }

    /// `GET categories`
    pub async fn categories(&self) -> Reply {
        ResponseAssembler::assemble(self.categories_payload().await)
    }

    /// `GET questions?page=N`
    pub async fn questions(&self, page: Option<i64>) -> Reply {
        ResponseAssembler::assemble(self.questions_payload(page).await)
    }

    /// `GET categories/{id}/questions?page=N`
    pub async fn category_questions(&self, category_id: i64, page: Option<i64>) -> Reply {
        ResponseAssembler::assemble(self.category_questions_payload(category_id, page).await)
    }

    /// `GET questions/{id}`
    pub async fn get_question(&self, id: i64) -> Reply {
        let result = self.fetch_question(id).await.map(QuestionResponse::new);
        ResponseAssembler::assemble(result)
    }

    /// `POST questions`
    pub async fn create_question(&self, body: CreateQuestionRequest) -> Reply {
        ResponseAssembler::assemble(self.create_question_payload(body).await)
    }

    /// `DELETE questions/{id}`
    pub async fn delete_question(&self, id: i64) -> Reply {
        ResponseAssembler::assemble(self.delete_question_payload(id).await)
    }

    /// `POST search`
    pub async fn search(&self, body: SearchRequest) -> Reply {
        ResponseAssembler::assemble(self.search_payload(body).await)
    }

    /// `POST quizzes`
    pub async fn quiz(&mut self, body: &QuizRequest) -> Reply {
        let result = self.selector.select(body).await.map(QuestionResponse::new);
        ResponseAssembler::assemble(result)
    }

    /// Insert the standard categories into an empty store.
    pub async fn seed(&self) -> Reply {
        ResponseAssembler::assemble(Seeder::seed_categories(self.service).await)
    }

    /// Bulk-insert questions from a JSON-lines file.
    pub async fn import(&self, path: &Path) -> Reply {
        ResponseAssembler::assemble(Seeder::import_questions(self.service, path).await)
    }

    async fn categories_payload(&self) -> Result<CategoriesResponse, QueryError> {
        let categories = self.service.list_categories().await?;
        if categories.is_empty() {
            return Err(QueryError::NotFound("no categories".into()));
        }
        Ok(CategoriesResponse::new(category_map(&categories)))
    }

    async fn questions_payload(&self, page: Option<i64>) -> Result<QuestionsResponse, QueryError> {
        let page = self.engine().all(page_number(page)?).await?;
        self.listing(page).await
    }

    async fn search_payload(&self, body: SearchRequest) -> Result<QuestionsResponse, QueryError> {
        let term = body
            .search_term
            .ok_or_else(|| QueryError::BadRequest("missing required field 'search_term'".into()))?;
        let page = self.engine().search(&term, page_number(body.page)?).await?;
        self.listing(page).await
    }

    /// Shared tail of `all` and `search`: an empty page or an empty
    /// category table is not-found.
    async fn listing(&self, page: Page<Question>) -> Result<QuestionsResponse, QueryError> {
        if page.is_empty() {
            return Err(QueryError::NotFound(format!(
                "page {} is empty ({} matching)",
                page.page, page.total
            )));
        }
        let categories = self.service.list_categories().await?;
        if categories.is_empty() {
            return Err(QueryError::NotFound("no categories".into()));
        }
        Ok(QuestionsResponse::new(
            page.items,
            page.total,
            category_map(&categories),
        ))
    }

    async fn category_questions_payload(
        &self,
        category_id: i64,
        page: Option<i64>,
    ) -> Result<CategoryQuestionsResponse, QueryError> {
        let page = self
            .engine()
            .by_category(category_id, page_number(page)?)
            .await?;
        if page.total == 0 {
            return Err(QueryError::NotFound(format!(
                "category {category_id} has no questions"
            )));
        }
        Ok(CategoryQuestionsResponse::new(
            page.items,
            page.total,
            category_id,
        ))
    }

    async fn fetch_question(&self, id: i64) -> Result<Question, QueryError> {
        match self.service.get_question(id).await {
            Ok(question) => Ok(question),
            Err(DatabaseError::NoResult) => Err(QueryError::NotFound(format!("question {id}"))),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_question_payload(
        &self,
        body: CreateQuestionRequest,
    ) -> Result<QuestionCreatedResponse, QueryError> {
        let new = body.into_new_question()?;
        if !self.service.category_exists(new.category).await? {
            return Err(QueryError::BadRequest(format!(
                "unknown category {}",
                new.category
            )));
        }
        let created = self.service.create_question(&new).await?;
        Ok(QuestionCreatedResponse::new(created.id))
    }

    async fn delete_question_payload(
        &self,
        id: i64,
    ) -> Result<QuestionDeletedResponse, QueryError> {
        if !self.service.delete_question(id).await? {
            return Err(QueryError::NotFound(format!("question {id}")));
        }
        Ok(QuestionDeletedResponse::new(id))
    }
}
