use trivia_query::Reply;

use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<Reply> {
    let reply = match command {
        Commands::Categories => commands::categories::handle(ctx).await,
        Commands::Questions { action } => commands::questions::handle(action, ctx).await,
        Commands::CategoryQuestions(args) => commands::categories::handle_questions(&args, ctx).await,
        Commands::Search(args) => commands::search::handle(args, ctx).await,
        Commands::Quiz(args) => commands::quiz::handle(args, ctx).await,
        Commands::Seed => commands::seed::handle(ctx).await,
        Commands::Import(args) => commands::seed::handle_import(&args, ctx).await,
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use trivia_config::TriviaConfig;

    use super::dispatch;
    use crate::cli::Cli;
    use crate::context::AppContext;

    async fn memory_ctx() -> AppContext {
        let mut config = TriviaConfig::default();
        config.database.path = ":memory:".into();
        AppContext::init(config).await.unwrap()
    }

    async fn run(ctx: &AppContext, args: &[&str]) -> trivia_query::Reply {
        let mut argv = vec!["trivia"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        dispatch(cli.command, ctx).await.unwrap()
    }

    #[tokio::test]
    async fn empty_store_has_no_categories() {
        let ctx = memory_ctx().await;
        let reply = run(&ctx, &["categories"]).await;
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn seed_create_list_delete() {
        let ctx = memory_ctx().await;
        assert_eq!(run(&ctx, &["seed"]).await.body["categories_created"], 6);

        let created = run(
            &ctx,
            &[
                "questions", "create", "--question", "Q", "--answer", "A", "--category", "5",
                "--difficulty", "2",
            ],
        )
        .await;
        assert_eq!(created.status, 200);
        let id = created.body["created"].as_i64().unwrap();

        let listed = run(&ctx, &["questions", "list"]).await;
        assert_eq!(listed.body["total_questions"], 1);

        let by_category = run(&ctx, &["category-questions", "5"]).await;
        assert_eq!(by_category.body["current_category"], 5);

        let id_arg = id.to_string();
        let deleted = run(&ctx, &["questions", "delete", &id_arg]).await;
        assert_eq!(deleted.body, json!({"success": true, "deleted": id}));

        let again = run(&ctx, &["questions", "delete", &id_arg]).await;
        assert_eq!(again.status, 404);
    }

    #[tokio::test]
    async fn create_without_answer_is_bad_request() {
        let ctx = memory_ctx().await;
        run(&ctx, &["seed"]).await;
        let reply = run(
            &ctx,
            &["questions", "create", "--question", "Q", "--category", "1", "--difficulty", "1"],
        )
        .await;
        assert_eq!(
            reply.body,
            json!({"success": false, "error": 400, "message": "Bad Request"})
        );
    }

    #[tokio::test]
    async fn search_without_term_is_bad_request() {
        let ctx = memory_ctx().await;
        run(&ctx, &["seed"]).await;
        assert_eq!(run(&ctx, &["search"]).await.status, 400);
    }

    #[tokio::test]
    async fn quiz_without_category_is_bad_request() {
        let ctx = memory_ctx().await;
        run(&ctx, &["seed"]).await;
        assert_eq!(run(&ctx, &["quiz"]).await.status, 400);
        assert_eq!(run(&ctx, &["quiz", "--category", "0"]).await.status, 404);
    }
}
