use trivia_core::requests::{FlexibleId, QuizCategory, QuizRequest};
use trivia_query::Reply;

use crate::cli::root_commands::QuizArgs;
use crate::context::AppContext;

/// Handle `trivia quiz`. Without `--category` the request carries no
/// `quiz_category` and is rejected.
pub async fn handle(args: QuizArgs, ctx: &AppContext) -> Reply {
    let body = QuizRequest {
        previous_questions: Some(args.previous),
        quiz_category: args.category.map(|id| QuizCategory {
            id: Some(FlexibleId::Text(id)),
            kind: None,
        }),
    };
    ctx.api().quiz(&body).await
}
