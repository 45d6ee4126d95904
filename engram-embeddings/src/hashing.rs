//! Deterministic local embedding via term hashing.
//!
//! Each lowercase term is hashed into a fixed-dimension bucket and weighted
//! by log-scaled term frequency, then the vector is L2-normalized. Far less
//! semantically rich than a neural encoder, but deterministic, dependency-
//! free, and always available.

use tracing::debug;

use engram_core::errors::EngramResult;
use engram_core::traits::IEmbeddingProvider;

const DEFAULT_DIMENSIONS: usize = 256;

/// Deterministic bag-of-terms embedding provider.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        debug!(dimensions, "hashing embedder created");
        Self { dimensions }
    }

    /// Mix a term into a bucket index. splitmix64-style avalanche over a
    /// byte-folded seed, so near-identical terms land in unrelated buckets.
    fn bucket(&self, term: &str) -> usize {
        let mut z: u64 = 0x9e3779b97f4a7c15;
        for b in term.as_bytes() {
            z = z.wrapping_add(*b as u64).wrapping_mul(0xbf58476d1ce4e5b9);
        }
        z ^= z >> 30;
        z = z.wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;
        (z as usize) % self.dimensions
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let mut term_count = 0usize;

        for term in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let lowered = term.to_lowercase();
            vec[self.bucket(&lowered)] += 1.0;
            term_count += 1;
        }

        if term_count == 0 {
            return vec;
        }

        // Log-scale raw counts so repeated terms don't dominate.
        for v in vec.iter_mut().filter(|v| **v > 0.0) {
            *v = 1.0 + v.ln();
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> EngramResult<Vec<f32>> {
        Ok(self.encode(text))
    }

    fn embed_batch(&self, texts: &[String]) -> EngramResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.encode(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-encoder"
    }

    fn is_available(&self) -> bool {
        true
    }
}
