use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::QuestionCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every category as an id -> type map.
    Categories,
    /// Question listing, lookup, and editing.
    Questions {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Questions in one category.
    CategoryQuestions(CategoryQuestionsArgs),
    /// Case-insensitive search over question text.
    Search(SearchArgs),
    /// Draw the next quiz question.
    Quiz(QuizArgs),
    /// Insert the standard categories into an empty store.
    Seed,
    /// Bulk-insert questions from a JSON-lines file.
    Import(ImportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CategoryQuestionsArgs {
    /// Category id.
    pub id: i64,
    /// 1-based page number.
    #[arg(long)]
    pub page: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Substring to look for. Omitting it is a bad request.
    #[arg(long)]
    pub term: Option<String>,
    /// 1-based page number.
    #[arg(long)]
    pub page: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct QuizArgs {
    /// Category id, `0` for all categories.
    #[arg(long)]
    pub category: Option<String>,
    /// Ids already asked this round.
    #[arg(long, value_delimiter = ',')]
    pub previous: Vec<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// JSON-lines file, one `{question, answer, category, difficulty}` per line.
    pub file: PathBuf,
}
