//! Similarity scoring
//!
//! Cosine similarity: dot(a, b) / (||a|| * ||b||), in [-1, 1].
//! Defined as exactly 0.0 when either vector has zero magnitude.

/// Cosine similarity between two equal-length vectors
///
/// Callers validate dimensions before scoring; with mismatched lengths only
/// the common prefix contributes. Each vector is scaled by its largest
/// absolute component first, so squared norms neither overflow for huge
/// finite components nor underflow to zero for tiny ones.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (max_a, max_b) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f64, 0.0f64), |(ma, mb), (x, y)| {
            (ma.max(x.abs()), mb.max(y.abs()))
        });

    if max_a == 0.0 || max_b == 0.0 {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x / max_a, y / max_b))
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    // Rounding can push |cos| a hair past 1
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}
