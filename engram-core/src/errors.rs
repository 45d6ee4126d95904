//! Error types shared across the workspace.
//!
//! The embedding collaborator is the only fallible boundary: its failures
//! propagate to the caller unmodified, with no internal retry or recovery.

/// Embedding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider '{provider}' is unavailable")]
    Unavailable { provider: String },

    #[error("embedding inference failed in '{provider}': {reason}")]
    Inference { provider: String, reason: String },

    #[error("provider returned {actual} embedding rows for {expected} inputs")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Top-level error for all engram operations.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// Convenience alias used throughout the workspace.
pub type EngramResult<T> = Result<T, EngramError>;
