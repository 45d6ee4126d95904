//! ConversationalPipeline: orchestrates one query turn end-to-end.
//!
//! query → context window → reformulate → search → synthesize → record.

use std::sync::Arc;

use tracing::{debug, info};

use engram_core::config::{MemoryConfig, PipelineConfig};
use engram_core::constants::{EMPTY_INDEX_RESPONSE, RESPONSE_SOURCE_LIMIT};
use engram_core::errors::EngramResult;
use engram_core::models::{ConversationTurn, Message, Role};
use engram_core::traits::IEmbeddingProvider;
use engram_embeddings::HashingEmbedder;
use engram_memory::ConversationMemory;
use engram_reformulation::QueryReformulator;
use engram_retrieval::Retriever;

/// The conversational retrieval pipeline.
///
/// Stateless across calls except through its memory and retriever; each
/// instance owns its state, so independent pipelines never interfere.
pub struct ConversationalPipeline {
    memory: ConversationMemory,
    reformulator: QueryReformulator,
    retriever: Retriever,
    config: PipelineConfig,
}

impl ConversationalPipeline {
    /// Create a pipeline over an injected embedding provider.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: PipelineConfig) -> Self {
        info!(
            provider = provider.name(),
            model = %config.model_name,
            top_k = config.top_k,
            "pipeline created"
        );
        Self {
            memory: ConversationMemory::new(MemoryConfig::default()),
            reformulator: QueryReformulator::new(config.model_name.clone()),
            retriever: Retriever::new(provider),
            config,
        }
    }

    /// Convenience constructor over the local hashing encoder with default
    /// configuration.
    pub fn with_local_encoder() -> Self {
        Self::new(Arc::new(HashingEmbedder::default()), PipelineConfig::default())
    }

    /// Index a document corpus, replacing any prior index.
    pub fn index(&mut self, documents: &[String]) -> EngramResult<()> {
        self.retriever.index(documents)
    }

    /// Run one query turn with the configured top_k.
    pub fn query(&mut self, user_query: &str) -> EngramResult<ConversationTurn> {
        self.query_with_top_k(user_query, self.config.top_k)
    }

    /// Run one query turn.
    ///
    /// An embedding failure propagates before any message is recorded, so a
    /// failed turn leaves history untouched.
    pub fn query_with_top_k(
        &mut self,
        user_query: &str,
        top_k: usize,
    ) -> EngramResult<ConversationTurn> {
        // Step 1: Read the recent context window.
        let window = self.memory.get_context_window(self.config.context_window);

        // Step 2: Resolve pronouns against the window.
        let reformulated = self.reformulator.reformulate(user_query, &window);
        debug!(
            rewritten = reformulated != user_query,
            window = window.len(),
            "reformulation decided"
        );

        // Step 3: Rank the corpus against the reformulated query.
        let results = self.retriever.search_with_top_k(&reformulated, top_k)?;
        info!(hits = results.len(), top_k, "search complete");

        // Step 4: Source texts in rank order.
        let sources: Vec<String> = results.into_iter().map(|r| r.text).collect();

        // Step 5: Extractive synthesis from the top sources.
        let response = if sources.is_empty() {
            EMPTY_INDEX_RESPONSE.to_string()
        } else {
            sources[..sources.len().min(RESPONSE_SOURCE_LIMIT)].join(" ")
        };

        // Step 6: Record the exchange — original query first, then response.
        self.memory.add_message(Role::User, user_query);
        self.memory.add_message(Role::Assistant, response.clone());

        Ok(ConversationTurn {
            user_query: user_query.to_string(),
            reformulated_query: reformulated,
            response,
            sources,
        })
    }

    /// Full conversation history, oldest first.
    pub fn get_history(&self) -> Vec<Message> {
        self.memory.get_history(None)
    }

    /// Render the history as labelled lines.
    pub fn summarize_history(&self) -> String {
        self.memory.summarize_history()
    }

    /// Forget the conversation. The index is kept.
    pub fn reset(&mut self) {
        self.memory.clear();
        debug!("conversation memory cleared");
    }
}
