use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Maximum messages retained; oldest are evicted first beyond this.
    pub max_history: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_history: defaults::DEFAULT_MAX_HISTORY,
        }
    }
}
