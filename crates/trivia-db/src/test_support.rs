//! Shared test utilities for trivia-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use trivia_core::entities::NewQuestion;
    use trivia_core::ids::SEED_CATEGORIES;

    use crate::service::TriviaService;

    /// Create an in-memory TriviaService with an empty schema.
    pub async fn test_service() -> TriviaService {
        TriviaService::new_local(":memory:").await.unwrap()
    }

    /// In-memory service holding the six standard categories (ids 1..=6).
    pub async fn seeded_service() -> TriviaService {
        let svc = test_service().await;
        for kind in SEED_CATEGORIES {
            svc.create_category(kind).await.unwrap();
        }
        svc
    }

    /// Seeded service plus `count` questions in `category`.
    pub async fn service_with_questions(count: usize, category: i64) -> TriviaService {
        let svc = seeded_service().await;
        for i in 0..count {
            svc.create_question(&new_question(&format!("Question {i}"), category))
                .await
                .unwrap();
        }
        svc
    }

    pub fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "Answer".to_string(),
            category,
            difficulty: 2,
        }
    }
}
