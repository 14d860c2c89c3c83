use trivia_config::TriviaConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TriviaConfig> {
    let config = TriviaConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags)?)
}

fn apply_overrides(
    mut config: TriviaConfig,
    flags: &GlobalFlags,
) -> Result<TriviaConfig, trivia_config::ConfigError> {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    config.validate()?;
    Ok(config)
}
