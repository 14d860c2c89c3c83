use trivia_query::Reply;

use crate::cli::root_commands::CategoryQuestionsArgs;
use crate::context::AppContext;

/// Handle `trivia categories`.
pub async fn handle(ctx: &AppContext) -> Reply {
    ctx.api().categories().await
}

/// Handle `trivia category-questions <id>`.
pub async fn handle_questions(args: &CategoryQuestionsArgs, ctx: &AppContext) -> Reply {
    ctx.api().category_questions(args.id, args.page).await
}
