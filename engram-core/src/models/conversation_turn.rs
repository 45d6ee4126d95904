use serde::{Deserialize, Serialize};

/// Result of a single pipeline query: the original and rewritten query,
/// the synthesized response, and the retrieved source texts in rank order.
///
/// Transient — returned to the caller, never retained by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_query: String,
    pub reformulated_query: String,
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
}
