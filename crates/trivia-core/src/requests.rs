//! Request bodies as the boundary layer receives them.
//!
//! Every field is optional at the serde level so that a missing (or `null`)
//! field can be told apart from an empty one and reported as bad-request by
//! the query layer instead of failing deserialization with an opaque message.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NewQuestion;
use crate::errors::CoreError;
use crate::ids::{ALL_CATEGORIES, FIRST_PAGE};

/// An integer id that clients may send either as a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    /// Interpret as an integer.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidId` if the text form is not an integer.
    pub fn to_i64(&self) -> Result<i64, CoreError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::InvalidId(s.clone())),
        }
    }
}

impl From<i64> for FlexibleId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Body of `POST questions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<FlexibleId>,
    #[serde(default)]
    pub difficulty: Option<FlexibleId>,
}

impl CreateQuestionRequest {
    /// Require all four fields and convert into a validated [`NewQuestion`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a field is missing or fails
    /// validation, and `CoreError::InvalidId` for non-numeric ids.
    pub fn into_new_question(self) -> Result<NewQuestion, CoreError> {
        let question = self.question.ok_or_else(|| missing("question"))?;
        let answer = self.answer.ok_or_else(|| missing("answer"))?;
        let category = self.category.ok_or_else(|| missing("category"))?.to_i64()?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| missing("difficulty"))?
            .to_i64()?;

        let new = NewQuestion {
            question,
            answer,
            category,
            difficulty,
        };
        new.validate()?;
        Ok(new)
    }
}

/// Body of `POST search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
}

/// The `quiz_category` object of a quiz request. Only `id` is consulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<FlexibleId>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Which categories a quiz draw may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// Every category currently known to the store.
    All,
    /// Exactly one category.
    Only(i64),
}

impl QuizCategory {
    /// Resolve the id into a scope. `0` is the "all categories" sentinel.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `id` is absent or negative, and
    /// `CoreError::InvalidId` if it is not numeric.
    pub fn scope(&self) -> Result<CategoryScope, CoreError> {
        let id = self
            .id
            .as_ref()
            .ok_or_else(|| missing("quiz_category.id"))?
            .to_i64()?;
        match id {
            ALL_CATEGORIES => Ok(CategoryScope::All),
            id if id > 0 => Ok(CategoryScope::Only(id)),
            id => Err(CoreError::Validation(format!(
                "quiz category id must not be negative, got {id}"
            ))),
        }
    }
}

/// Body of `POST quizzes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Convert an optional raw page number into a 1-based page.
///
/// Absent means the first page. Pages past `u32::MAX` saturate; they are
/// past any stored data either way.
///
/// # Errors
///
/// Returns `CoreError::Validation` for pages below 1.
pub fn page_number(raw: Option<i64>) -> Result<u32, CoreError> {
    let Some(raw) = raw else {
        return Ok(FIRST_PAGE);
    };
    if raw < i64::from(FIRST_PAGE) {
        return Err(CoreError::Validation(format!(
            "page must be a positive integer, got {raw}"
        )));
    }
    Ok(u32::try_from(raw).unwrap_or(u32::MAX))
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("missing required field '{field}'"))
}
