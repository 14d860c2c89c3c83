use anyhow::Context;
use trivia_config::TriviaConfig;
use trivia_db::service::TriviaService;
use trivia_query::{Paginator, TriviaApi};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TriviaService,
    pub config: TriviaConfig,
}

impl AppContext {
    /// Open the configured store, running migrations on first use.
    pub async fn init(config: TriviaConfig) -> anyhow::Result<Self> {
        if config.database.is_in_memory() {
            tracing::info!("using an in-memory store; nothing will be persisted");
        }
        let service = TriviaService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        Ok(Self { service, config })
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.config.pagination.page_size)
    }

    /// A facade over this context's store with an entropy-seeded quiz source.
    pub fn api(&self) -> TriviaApi<'_> {
        TriviaApi::new(&self.service, self.paginator())
    }
}
