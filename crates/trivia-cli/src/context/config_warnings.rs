use trivia_config::{DatabaseConfig, PaginationConfig, TriviaConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TriviaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TriviaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.database.path == DatabaseConfig::default().path
        && has_single_underscore_key(&env_keys, "TRIVIA_DATABASE")
    {
        warnings.push(
            "Database path appears default while TRIVIA_DATABASE* env vars exist. Use double underscores (example: TRIVIA_DATABASE__PATH)."
                .to_string(),
        );
    }

    if config.pagination.page_size == PaginationConfig::default().page_size
        && has_single_underscore_key(&env_keys, "TRIVIA_PAGINATION")
    {
        warnings.push(
            "Page size appears default while TRIVIA_PAGINATION* env vars exist. Use double underscores (example: TRIVIA_PAGINATION__PAGE_SIZE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
