use serde::{Deserialize, Serialize};

/// One retrieval hit: a stored document text and its cosine similarity
/// to the query, in [-1.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub text: String,
    pub score: f32,
}
