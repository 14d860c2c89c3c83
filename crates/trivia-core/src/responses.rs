//! Success payloads returned by the API operations.
//!
//! Field names are part of the wire contract consumed by the trivia web
//! client, so they stay `snake_case` and every payload carries
//! `success: true`. Failures use [`crate::errors::ErrorResponse`] instead.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, Question};

/// `id -> type` map of categories, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the `id -> type` map from category rows.
#[must_use]
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Response from `GET categories`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    #[must_use]
    pub const fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// Response from `GET questions` and `POST search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    /// Always `null` for the unfiltered list and search.
    pub current_category: Option<i64>,
}

impl QuestionsResponse {
    #[must_use]
    pub const fn new(questions: Vec<Question>, total_questions: u64, categories: CategoryMap) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            categories,
            current_category: None,
        }
    }
}

/// Response from `GET categories/{id}/questions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: i64,
}

impl CategoryQuestionsResponse {
    #[must_use]
    pub const fn new(questions: Vec<Question>, total_questions: u64, current_category: i64) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category,
        }
    }
}

/// Response carrying a single question: `GET questions/{id}` and `POST quizzes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Question,
}

impl QuestionResponse {
    #[must_use]
    pub const fn new(question: Question) -> Self {
        Self {
            success: true,
            question,
        }
    }
}

/// Response from `POST questions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
}

impl QuestionCreatedResponse {
    #[must_use]
    pub const fn new(created: i64) -> Self {
        Self {
            success: true,
            created,
        }
    }
}

/// Response from `DELETE questions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

impl QuestionDeletedResponse {
    #[must_use]
    pub const fn new(deleted: i64) -> Self {
        Self {
            success: true,
            deleted,
        }
    }
}

/// Response from `trivia seed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedResponse {
    pub success: bool,
    pub categories_created: u32,
}

/// Response from `trivia import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub success: bool,
    pub imported: u32,
    pub created: Vec<i64>,
}
