use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A stored trivia question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// The four caller-supplied fields of a question, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Check the field-level invariants that do not need the store.
    ///
    /// Category existence is checked by the caller against the store.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for blank text, a non-positive category
    /// id, or a non-positive difficulty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.question.trim().is_empty() {
            return Err(CoreError::Validation("question text is blank".into()));
        }
        if self.answer.trim().is_empty() {
            return Err(CoreError::Validation("answer text is blank".into()));
        }
        if self.category < 1 {
            return Err(CoreError::Validation(format!(
                "category id must be positive, got {}",
                self.category
            )));
        }
        if self.difficulty < 1 {
            return Err(CoreError::Validation(format!(
                "difficulty must be positive, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
