//! Deterministic embedding stand-ins for tests across the workspace.
//!
//! The retrieval core treats embedding as an injected capability, so tests
//! swap in fixed-vector providers instead of a real model. `FixedEmbedder`
//! maps known phrases to chosen vectors and counts provider invocations;
//! `FailingEmbedder` exercises error propagation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use engram_core::errors::{EmbeddingError, EngramResult};
use engram_core::models::{Message, Role};
use engram_core::traits::IEmbeddingProvider;

/// Embedding provider returning pre-chosen vectors for known phrases.
///
/// Unknown text falls back to a deterministic byte-derived vector so any
/// input embeds without panicking. Every `embed`/`embed_batch` call is
/// counted, letting tests assert that the provider was (not) invoked.
#[derive(Debug, Default)]
pub struct FixedEmbedder {
    dimensions: usize,
    phrases: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
    fail_single: bool,
    fail_after: Option<usize>,
}

impl FixedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            phrases: HashMap::new(),
            calls: AtomicUsize::new(0),
            fail_single: false,
            fail_after: None,
        }
    }

    /// Register a phrase with a fixed vector.
    pub fn with_phrase(mut self, phrase: impl Into<String>, vector: Vec<f32>) -> Self {
        self.phrases.insert(phrase.into(), vector);
        self
    }

    /// Make single-text `embed` calls fail while batches keep working.
    pub fn failing_on_single(mut self) -> Self {
        self.fail_single = true;
        self
    }

    /// Make every call past the first `n` fail.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Number of embed/embed_batch invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> EngramResult<()> {
        let seen = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_after {
            if seen >= limit {
                return Err(EmbeddingError::Unavailable {
                    provider: self.name().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        if let Some(v) = self.phrases.get(text) {
            return v.clone();
        }
        if self.dimensions == 0 {
            return Vec::new();
        }
        // Deterministic fallback: fold bytes into each dimension.
        let mut v = vec![0.0f32; self.dimensions];
        for (i, b) in text.bytes().enumerate() {
            v[i % self.dimensions] += f32::from(b) / 255.0;
        }
        v
    }
}

impl IEmbeddingProvider for FixedEmbedder {
    fn embed(&self, text: &str) -> EngramResult<Vec<f32>> {
        self.record_call()?;
        if self.fail_single {
            return Err(EmbeddingError::Inference {
                provider: self.name().to_string(),
                reason: "single-text embedding disabled in fixture".to_string(),
            }
            .into());
        }
        Ok(self.vector_for(text))
    }

    fn embed_batch(&self, texts: &[String]) -> EngramResult<Vec<Vec<f32>>> {
        self.record_call()?;
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "fixed-embedder"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Embedding provider whose every call fails with `Unavailable`.
#[derive(Debug, Default)]
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> EngramResult<Vec<f32>> {
        Err(EmbeddingError::Unavailable {
            provider: self.name().to_string(),
        }
        .into())
    }

    fn embed_batch(&self, _texts: &[String]) -> EngramResult<Vec<Vec<f32>>> {
        Err(EmbeddingError::Unavailable {
            provider: self.name().to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Convenience: owned strings from literals.
pub fn docs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

/// Convenience: a message with a capture-time timestamp.
pub fn message(role: Role, content: &str) -> Message {
    Message::new(role, content)
}

/// Convenience: a full user/assistant exchange.
pub fn exchange(user: &str, assistant: &str) -> Vec<Message> {
    vec![
        Message::new(Role::User, user),
        Message::new(Role::Assistant, assistant),
    ]
}
