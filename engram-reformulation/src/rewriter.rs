use std::sync::LazyLock;

use regex::Regex;

use engram_core::constants::TOPIC_PREFIX_CHARS;
use engram_core::models::{Message, Role};

/// Whole-word, case-insensitive pronouns that mark a query as
/// context-dependent.
static PRONOUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(it|they|this|that|these|those|its|their|them|he|she)\b")
        .expect("pronoun pattern is valid")
});

/// Rule-based query rewriter.
///
/// Carries a model identifier for a future semantic rewrite; the current
/// implementation is purely lexical and never calls an embedding model.
#[derive(Debug, Clone)]
pub struct QueryReformulator {
    pub model_name: String,
}

impl QueryReformulator {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }

    /// Rewrite `query` against `history`, or return it unchanged.
    ///
    /// The query is rewritten only when all three hold: history is
    /// non-empty, the query contains a pronoun, and the history has at
    /// least one user message. The rewrite is
    /// `"Regarding {topic}: {query}"` where the topic is the first 100
    /// characters of the most recent user message — a plain prefix cut,
    /// not word-boundary aware.
    pub fn reformulate(&self, query: &str, history: &[Message]) -> String {
        if history.is_empty() {
            return query.to_string();
        }

        if !PRONOUNS.is_match(query) {
            return query.to_string();
        }

        match last_user_topic(history) {
            Some(topic) => format!("Regarding {topic}: {query}"),
            None => query.to_string(),
        }
    }
}

impl Default for QueryReformulator {
    fn default() -> Self {
        Self::new(engram_core::constants::DEFAULT_MODEL_NAME)
    }
}

/// Most recent user message content, cut to the topic prefix length.
/// The cut is char-boundary safe so multi-byte content cannot split.
/// An empty content counts as no topic; earlier messages are not consulted.
fn last_user_topic(history: &[Message]) -> Option<String> {
    history
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.chars().take(TOPIC_PREFIX_CHARS).collect::<String>())
        .filter(|topic| !topic.is_empty())
}
