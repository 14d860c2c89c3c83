use clap::Subcommand;

/// Question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List questions, ten per page by default.
    List {
        #[arg(long)]
        page: Option<i64>,
    },
    /// Get a question by id.
    Get { id: i64 },
    /// Create a question. Every field is required; missing ones are reported
    /// as a bad request.
    Create {
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Delete a question by id.
    Delete { id: i64 },
}
