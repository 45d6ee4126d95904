//! Retriever — embeds documents once at index time, ranks by cosine.

use std::sync::Arc;

use tracing::{debug, info};

use engram_core::config::RetrievalConfig;
use engram_core::errors::{EmbeddingError, EngramResult};
use engram_core::models::ScoredDocument;
use engram_core::traits::IEmbeddingProvider;

use crate::similarity::cosine_similarity;

/// A stored document and its embedding, kept together so the store is
/// replaced as one field and readers can never observe mismatched halves.
#[derive(Debug, Clone)]
struct IndexedDocument {
    text: String,
    embedding: Vec<f32>,
}

/// Brute-force vector retriever.
///
/// `index` replaces the whole store; `search` scores every stored vector
/// against the query and returns the top-k hits, ties kept in original
/// document order. Each instance owns its store.
pub struct Retriever {
    provider: Arc<dyn IEmbeddingProvider>,
    config: RetrievalConfig,
    store: Vec<IndexedDocument>,
}

impl Retriever {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self::with_config(provider, RetrievalConfig::default())
    }

    pub fn with_config(provider: Arc<dyn IEmbeddingProvider>, config: RetrievalConfig) -> Self {
        Self {
            provider,
            config,
            store: Vec::new(),
        }
    }

    /// Embed `documents` in one batch call and replace the entire store,
    /// preserving input order. An empty list yields an empty store with no
    /// embedding call. Embedding failure propagates and leaves the prior
    /// store untouched.
    pub fn index(&mut self, documents: &[String]) -> EngramResult<()> {
        if documents.is_empty() {
            self.store = Vec::new();
            debug!("indexed empty document list");
            return Ok(());
        }

        let embeddings = self.provider.embed_batch(documents)?;
        if embeddings.len() != documents.len() {
            return Err(EmbeddingError::ShapeMismatch {
                expected: documents.len(),
                actual: embeddings.len(),
            }
            .into());
        }

        self.store = documents
            .iter()
            .zip(embeddings)
            .map(|(text, embedding)| IndexedDocument {
                text: text.clone(),
                embedding,
            })
            .collect();

        info!(
            documents = self.store.len(),
            provider = self.provider.name(),
            "index replaced"
        );
        Ok(())
    }

    /// Rank stored documents against `query` with the configured top_k.
    pub fn search(&self, query: &str) -> EngramResult<Vec<ScoredDocument>> {
        self.search_with_top_k(query, self.config.top_k)
    }

    /// Rank stored documents against `query` by cosine similarity.
    ///
    /// Returns at most `min(top_k, store size)` hits in descending score
    /// order; an empty store short-circuits to an empty result without
    /// calling the embedding provider.
    pub fn search_with_top_k(&self, query: &str, top_k: usize) -> EngramResult<Vec<ScoredDocument>> {
        if self.store.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.provider.embed(query)?;

        let mut scored: Vec<ScoredDocument> = self
            .store
            .iter()
            .map(|doc| ScoredDocument {
                text: doc.text.clone(),
                score: cosine_similarity(&query_embedding, &doc.embedding),
            })
            .collect();

        // Stable sort: cosine ties keep original document order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k.min(self.store.len()));

        debug!(hits = scored.len(), top_k, "search ranked store");
        Ok(scored)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
