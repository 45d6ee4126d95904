use serde::{Deserialize, Serialize};

use super::defaults;

/// Retriever configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Result count for a search; clamped to the store size at query time.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_SEARCH_TOP_K,
        }
    }
}
