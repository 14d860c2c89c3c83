//! Database location configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    String::from("trivia.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:` for a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a database path has been set.
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Whether the configured path points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
