use trivia_core::requests::SearchRequest;
use trivia_query::Reply;

use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;

/// Handle `trivia search`.
pub async fn handle(args: SearchArgs, ctx: &AppContext) -> Reply {
    let body = SearchRequest {
        search_term: args.term,
        page: args.page,
    };
    ctx.api().search(body).await
}
