//! Pagination configuration.

use serde::{Deserialize, Serialize};
use trivia_core::ids::DEFAULT_PAGE_SIZE;

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Questions per page for list, category, and search results.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
