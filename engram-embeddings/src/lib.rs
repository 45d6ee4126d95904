//! # engram-embeddings
//!
//! Embedding providers implementing `IEmbeddingProvider`. The retrieval
//! core treats embedding as an injected external capability; this crate
//! supplies a deterministic local encoder so the system works offline and
//! in tests without model downloads.

mod hashing;

pub use hashing::HashingEmbedder;
