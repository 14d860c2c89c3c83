use trivia_query::Reply;

use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;

/// Handle `trivia seed`.
pub async fn handle(ctx: &AppContext) -> Reply {
    ctx.api().seed().await
}

/// Handle `trivia import <file>`.
pub async fn handle_import(args: &ImportArgs, ctx: &AppContext) -> Reply {
    ctx.api().import(&args.file).await
}
