//! Question repository: filtered counts and pages, candidate reads for quiz
//! draws, and transactional writes.

use trivia_core::entities::{NewQuestion, Question};

use crate::error::DatabaseError;
use crate::helpers::{int_values, placeholders, read_count, to_sql_int};
use crate::service::TriviaService;

const SELECT_COLS: &str = "id, question, answer, category, difficulty";

/// The fixed predicates question lists can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question.
    All,
    /// `category == id`.
    Category(i64),
    /// Case-insensitive substring match against the question text.
    Search(String),
}

impl QuestionFilter {
    /// `WHERE` clause and its parameters. Placeholders start at `?1`.
    fn predicate(&self) -> (&'static str, Vec<libsql::Value>) {
        match self {
            Self::All => ("", Vec::new()),
            Self::Category(id) => ("WHERE category = ?1", vec![libsql::Value::Integer(*id)]),
            // SQLite's lower() only folds ASCII, so both sides are folded in Rust.
            // instr() keeps `%` and `_` in the term literal, unlike LIKE.
            Self::Search(term) => (
                "WHERE instr(question_folded, ?1) > 0",
                vec![libsql::Value::Text(fold(term))],
            ),
        }
    }
}

/// Case folding shared by stored question text and search terms.
fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

async fn collect_questions(mut rows: libsql::Rows) -> Result<Vec<Question>, DatabaseError> {
    let mut questions = Vec::new();
    while let Some(row) = rows.next().await? {
        questions.push(row_to_question(&row)?);
    }
    Ok(questions)
}

async fn insert_question(
    conn: &libsql::Connection,
    new: &NewQuestion,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query(
            "INSERT INTO questions (question, question_folded, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
            libsql::params![
                new.question.as_str(),
                fold(&new.question),
                new.answer.as_str(),
                new.category,
                new.difficulty
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

impl TriviaService {
    /// Insert a question and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails (including a foreign-key
    /// violation for an unknown category).
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let inserted = insert_question(&tx, new).await;
        let id = match inserted {
            Ok(id) => id,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        };
        tx.commit().await?;

        tracing::info!(id, category = new.category, "created question");
        Ok(new.clone().with_id(id))
    }

    /// Insert many questions in one transaction. All or nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any INSERT fails; nothing is committed then.
    pub async fn import_questions(&self, batch: &[NewQuestion]) -> Result<Vec<i64>, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let mut ids = Vec::with_capacity(batch.len());
        for new in batch {
            let inserted = insert_question(&tx, new).await;
            match inserted {
                Ok(id) => ids.push(id),
                Err(e) => {
                    tx.rollback().await?;
                    return Err(e);
                }
            }
        }
        tx.commit().await?;

        tracing::info!(count = ids.len(), "imported questions");
        Ok(ids)
    }

    /// Fetch a question by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no question has this id.
    pub async fn get_question(&self, id: i64) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    /// Replace all four fields of an existing question.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no question has this id.
    pub async fn replace_question(
        &self,
        id: i64,
        new: &NewQuestion,
    ) -> Result<Question, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let result = tx
            .execute(
                "UPDATE questions
                 SET question = ?1, question_folded = ?2, answer = ?3, category = ?4, difficulty = ?5
                 WHERE id = ?6",
                libsql::params![
                    new.question.as_str(),
                    fold(&new.question),
                    new.answer.as_str(),
                    new.category,
                    new.difficulty,
                    id
                ],
            )
            .await;
        let updated = match result {
            Ok(n) => n,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        if updated == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(id, "replaced question");
        Ok(new.clone().with_id(id))
    }

    /// Delete a question. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DELETE fails.
    pub async fn delete_question(&self, id: i64) -> Result<bool, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let result = tx.execute("DELETE FROM questions WHERE id = ?1", [id]).await;
        let removed = match result {
            Ok(n) => n,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        if removed > 0 {
            tracing::info!(id, "deleted question");
        }
        Ok(removed > 0)
    }

    /// Count questions matching a filter, before any pagination.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_questions(&self, filter: &QuestionFilter) -> Result<u64, DatabaseError> {
        let (where_clause, params) = filter.predicate();
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM questions {where_clause}"),
                libsql::params_from_iter(params),
            )
            .await?;
        read_count(rows).await
    }

    /// One window of the filtered questions, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_questions(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>, DatabaseError> {
        let (where_clause, mut params) = filter.predicate();
        let limit_idx = params.len() + 1;
        let offset_idx = params.len() + 2;
        params.push(libsql::Value::Integer(to_sql_int(limit)));
        params.push(libsql::Value::Integer(to_sql_int(offset)));

        tracing::debug!(?filter, offset, limit, "listing questions");
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM questions {where_clause}
                     ORDER BY id LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        collect_questions(rows).await
    }

    /// Every question in one of `category_ids`, ordered by id.
    ///
    /// Returns the whole scope with no store-side limit. Exclusion of
    /// already-asked ids is left to the caller so the bound-variable count
    /// depends only on the number of categories.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn candidate_questions(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<Question>, DatabaseError> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {SELECT_COLS} FROM questions WHERE category IN ({}) ORDER BY id",
            placeholders(1, category_ids.len())
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(int_values(category_ids)))
            .await?;
        let candidates = collect_questions(rows).await?;
        tracing::debug!(
            categories = category_ids.len(),
            candidates = candidates.len(),
            "resolved quiz candidates"
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{new_question, seeded_service, service_with_questions};

    #[tokio::test]
    async fn create_question_roundtrip() {
        let svc = seeded_service().await;
        let new = new_question("What year was the first Toy Story film released?", 5);

        let created = svc.create_question(&new).await.unwrap();
        assert!(created.id > 0);

        let fetched = svc.get_question(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.question, new.question);
        assert_eq!(fetched.answer, new.answer);
        assert_eq!(fetched.category, new.category);
        assert_eq!(fetched.difficulty, new.difficulty);
    }

    #[tokio::test]
    async fn create_question_unknown_category_fails() {
        let svc = seeded_service().await;
        let result = svc.create_question(&new_question("Orphan", 99)).await;
        assert!(result.is_err());
        assert_eq!(svc.count_questions(&QuestionFilter::All).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = seeded_service().await;
        let created = svc.create_question(&new_question("Q", 5)).await.unwrap();

        assert!(svc.delete_question(created.id).await.unwrap());
        assert!(!svc.delete_question(created.id).await.unwrap());
        assert!(matches!(
            svc.get_question(created.id).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn replace_question_overwrites_all_fields() {
        let svc = seeded_service().await;
        let created = svc.create_question(&new_question("Old", 1)).await.unwrap();

        let replacement = NewQuestion {
            question: "New".into(),
            answer: "Other".into(),
            category: 2,
            difficulty: 4,
        };
        let replaced = svc.replace_question(created.id, &replacement).await.unwrap();
        assert_eq!(replaced, replacement.clone().with_id(created.id));
        assert_eq!(svc.get_question(created.id).await.unwrap(), replaced);
    }

    #[tokio::test]
    async fn replace_missing_question_is_no_result() {
        let svc = seeded_service().await;
        let result = svc.replace_question(77, &new_question("Q", 1)).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn import_is_all_or_nothing() {
        let svc = seeded_service().await;
        let batch = vec![new_question("A", 1), new_question("B", 99)];

        assert!(svc.import_questions(&batch).await.is_err());
        assert_eq!(svc.count_questions(&QuestionFilter::All).await.unwrap(), 0);

        let ids = svc
            .import_questions(&[new_question("A", 1), new_question("B", 2)])
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);
    }

    #[tokio::test]
    async fn list_questions_pages_in_id_order() {
        let svc = service_with_questions(25, 1).await;

        let first = svc.list_questions(&QuestionFilter::All, 0, 10).await.unwrap();
        let third = svc.list_questions(&QuestionFilter::All, 20, 10).await.unwrap();
        let beyond = svc.list_questions(&QuestionFilter::All, 30, 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(third.len(), 5);
        assert!(beyond.is_empty());
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));
        assert!(first.last().unwrap().id < third[0].id);
    }

    #[tokio::test]
    async fn huge_offset_yields_empty_page() {
        let svc = service_with_questions(3, 1).await;
        let page = svc
            .list_questions(&QuestionFilter::All, u64::MAX, 10)
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn count_by_category() {
        let svc = seeded_service().await;
        for category in [1, 1, 2, 5] {
            svc.create_question(&new_question("Q", category)).await.unwrap();
        }

        assert_eq!(
            svc.count_questions(&QuestionFilter::Category(1)).await.unwrap(),
            2
        );
        assert_eq!(
            svc.count_questions(&QuestionFilter::Category(3)).await.unwrap(),
            0
        );
        assert_eq!(svc.count_questions(&QuestionFilter::All).await.unwrap(), 4);
    }

    #[rstest]
    #[case("title", 2)]
    #[case("TITLE", 2)]
    #[case("Title", 2)]
    #[case("hematite", 1)]
    #[case("", 4)]
    #[case("100%", 1)]
    #[case("%", 1)]
    #[case("zzz", 0)]
    #[case("ÉCOLE", 1)]
    #[case("École", 1)]
    #[tokio::test]
    async fn search_is_case_insensitive_substring(#[case] term: &str, #[case] expected: u64) {
        let svc = seeded_service().await;
        for text in [
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996? (title)",
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Is hematite 100% iron ore?",
            "Quelle est la plus grande école de Paris?",
        ] {
            svc.create_question(&new_question(text, 4)).await.unwrap();
        }

        let filter = QuestionFilter::Search(term.to_string());
        assert_eq!(svc.count_questions(&filter).await.unwrap(), expected);
        let listed = svc.list_questions(&filter, 0, 10).await.unwrap();
        assert_eq!(listed.len() as u64, expected);
    }

    #[tokio::test]
    async fn replaced_text_is_searchable_by_new_wording_only() {
        let svc = seeded_service().await;
        let created = svc
            .create_question(&new_question("Which river flows through Vienna?", 3))
            .await
            .unwrap();
        svc.replace_question(created.id, &new_question("Welcher Fluss fließt durch ÖSTERREICH?", 3))
            .await
            .unwrap();

        let old = QuestionFilter::Search("vienna".into());
        let new = QuestionFilter::Search("österreich".into());
        assert_eq!(svc.count_questions(&old).await.unwrap(), 0);
        assert_eq!(svc.count_questions(&new).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn candidates_cover_only_requested_categories() {
        let svc = seeded_service().await;
        let mut ids = Vec::new();
        for category in [1, 1, 2, 3, 4] {
            ids.push(svc.create_question(&new_question("Q", category)).await.unwrap().id);
        }

        let only_science = svc.candidate_questions(&[1]).await.unwrap();
        let got: Vec<i64> = only_science.iter().map(|q| q.id).collect();
        assert_eq!(got, vec![ids[0], ids[1]]);

        let several = svc.candidate_questions(&[1, 3, 99]).await.unwrap();
        let got: Vec<i64> = several.iter().map(|q| q.id).collect();
        assert_eq!(got, vec![ids[0], ids[1], ids[3]]);
    }

    #[tokio::test]
    async fn no_categories_means_no_candidates() {
        let svc = service_with_questions(5, 1).await;
        assert!(svc.candidate_questions(&[]).await.unwrap().is_empty());
    }
}
