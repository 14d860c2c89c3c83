//! Shared test utilities for trivia-query unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use trivia_core::entities::NewQuestion;
    use trivia_core::ids::SEED_CATEGORIES;
    use trivia_db::service::TriviaService;

    pub async fn test_service() -> TriviaService {
        TriviaService::new_local(":memory:").await.unwrap()
    }

    /// The six standard categories, ids 1..=6.
    pub async fn seeded_service() -> TriviaService {
        let svc = test_service().await;
        for kind in SEED_CATEGORIES {
            svc.create_category(kind).await.unwrap();
        }
        svc
    }

    pub async fn service_with_questions(count: usize, category: i64) -> TriviaService {
        let svc = seeded_service().await;
        for i in 0..count {
            svc.create_question(&new_question(&format!("Question {i}"), category))
                .await
                .unwrap();
        }
        svc
    }

    /// Seeded service with one question per text, all in category 1.
    pub async fn with_texts(texts: &[&str]) -> TriviaService {
        let svc = seeded_service().await;
        for text in texts {
            svc.create_question(&new_question(text, 1)).await.unwrap();
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
