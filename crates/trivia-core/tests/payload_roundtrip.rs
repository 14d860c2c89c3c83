//! Serde roundtrip and JsonSchema validation tests for entities and payloads.

use schemars::schema_for;
use serde_json::json;
use trivia_core::entities::*;
use trivia_core::errors::{ErrorKind, ErrorResponse};
use trivia_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn toy_story() -> Question {
    Question {
        id: 24,
        question: "What year was the first Toy Story film released in cinemas?".into(),
        answer: "1995".into(),
        category: 5,
        difficulty: 2,
    }
}

fn seeded_categories() -> CategoryMap {
    category_map(&[
        Category { id: 1, kind: "Science".into() },
        Category { id: 2, kind: "Art".into() },
        Category { id: 5, kind: "Entertainment".into() },
    ])
}

roundtrip_and_validate!(question_roundtrip, Question, toy_story());

roundtrip_and_validate!(
    category_roundtrip,
    Category,
    Category {
        id: 3,
        kind: "Geography".into(),
    }
);

roundtrip_and_validate!(
    categories_response_roundtrip,
    CategoriesResponse,
    CategoriesResponse::new(seeded_categories())
);

roundtrip_and_validate!(
    questions_response_roundtrip,
    QuestionsResponse,
    QuestionsResponse::new(vec![toy_story()], 19, seeded_categories())
);

roundtrip_and_validate!(
    category_questions_response_roundtrip,
    CategoryQuestionsResponse,
    CategoryQuestionsResponse::new(vec![toy_story()], 1, 5)
);

roundtrip_and_validate!(
    question_response_roundtrip,
    QuestionResponse,
    QuestionResponse::new(toy_story())
);

roundtrip_and_validate!(
    created_response_roundtrip,
    QuestionCreatedResponse,
    QuestionCreatedResponse::new(24)
);

roundtrip_and_validate!(
    deleted_response_roundtrip,
    QuestionDeletedResponse,
    QuestionDeletedResponse::new(24)
);

roundtrip_and_validate!(
    error_response_roundtrip,
    ErrorResponse,
    ErrorResponse::from(ErrorKind::NotFound)
);

#[test]
fn category_serializes_type_field() {
    let value = serde_json::to_value(Category {
        id: 1,
        kind: "Science".into(),
    })
    .unwrap();
    assert_eq!(value, json!({"id": 1, "type": "Science"}));
}

#[test]
fn categories_map_uses_id_keys() {
    let value = serde_json::to_value(CategoriesResponse::new(seeded_categories())).unwrap();
    assert_eq!(
        value,
        json!({
            "success": true,
            "categories": {"1": "Science", "2": "Art", "5": "Entertainment"}
        })
    );
}

#[test]
fn questions_response_has_null_current_category() {
    let value =
        serde_json::to_value(QuestionsResponse::new(vec![], 0, seeded_categories())).unwrap();
    assert_eq!(value["current_category"], serde_json::Value::Null);
    assert_eq!(value["success"], true);
}

#[test]
fn bad_request_envelope_shape() {
    let value = serde_json::to_value(ErrorResponse::from(ErrorKind::BadRequest)).unwrap();
    assert_eq!(
        value,
        json!({"success": false, "error": 400, "message": "Bad Request"})
    );
}
