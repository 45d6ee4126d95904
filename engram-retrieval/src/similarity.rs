//! Cosine similarity over f32 vectors with f64 accumulation.

/// Cosine similarity between two vectors, clamped to [-1.0, 1.0].
///
/// Total over all inputs: zero-magnitude, empty, or length-mismatched
/// vectors score 0.0 rather than producing NaN, so ranking never sees an
/// unordered value.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0) as f32
    }
}
