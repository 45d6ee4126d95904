//! # engram-retrieval
//!
//! In-memory document store with brute-force cosine-similarity search.
//! Embedding is delegated to an injected `IEmbeddingProvider`; this crate
//! owns the similarity math and top-k ranking.

pub mod similarity;

mod retriever;

pub use retriever::Retriever;
