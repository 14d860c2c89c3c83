use trivia_core::requests::{CreateQuestionRequest, FlexibleId};
use trivia_query::Reply;

use crate::cli::subcommands::QuestionCommands;
use crate::context::AppContext;

/// Handle `trivia questions`.
pub async fn handle(action: QuestionCommands, ctx: &AppContext) -> Reply {
    let api = ctx.api();
    match action {
        QuestionCommands::List { page } => api.questions(page).await,
        QuestionCommands::Get { id } => api.get_question(id).await,
        QuestionCommands::Create {
            question,
            answer,
            category,
            difficulty,
        } => {
            let body = CreateQuestionRequest {
                question,
                answer,
                category: category.map(FlexibleId::Text),
                difficulty: difficulty.map(FlexibleId::Text),
            };
            api.create_question(body).await
        }
        QuestionCommands::Delete { id } => api.delete_question(id).await,
    }
}
