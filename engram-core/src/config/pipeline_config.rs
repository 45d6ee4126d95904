use serde::{Deserialize, Serialize};

use super::defaults;

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model identifier handed opaquely to the embedding provider.
    pub model_name: String,
    /// Result count per query.
    pub top_k: usize,
    /// Recent messages fed to reformulation.
    pub context_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_name: defaults::DEFAULT_MODEL_NAME.to_string(),
            top_k: defaults::DEFAULT_PIPELINE_TOP_K,
            context_window: defaults::DEFAULT_CONTEXT_WINDOW,
        }
    }
}
