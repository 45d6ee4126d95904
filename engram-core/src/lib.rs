//! # engram-core
//!
//! Foundation crate for the engram conversational retrieval system.
//! Defines the conversation models, the embedding provider trait, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{MemoryConfig, PipelineConfig, RetrievalConfig};
pub use errors::{EmbeddingError, EngramError, EngramResult};
pub use models::{ConversationTurn, Message, Role, ScoredDocument};
pub use traits::IEmbeddingProvider;
