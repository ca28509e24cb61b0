//! Brute-force index strategy
//!
//! Exact scan: every candidate is scored against the query, O(n * d) per
//! query, then sorted in O(n log n).
//!
//! Ordering is score descending, then id ascending, so equal scores come back
//! in a deterministic order.

use super::backend::IndexStrategy;
use super::similarity::cosine_similarity;
use raydb_core::VectorItem;
use std::cmp::Ordering;

/// Exact cosine-similarity scan
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceStrategy;

impl IndexStrategy for BruteForceStrategy {
    fn name(&self) -> &str {
        "brute_force"
    }

    fn score_and_rank<'a>(
        &self,
        query: &[f64],
        candidates: Vec<&'a VectorItem>,
        top_k: usize,
    ) -> Vec<(&'a VectorItem, f64)> {
        let mut scored: Vec<(&'a VectorItem, f64)> = candidates
            .into_iter()
            .map(|item| (item, cosine_similarity(query, &item.vector)))
            .collect();

        // NaN scores (from NaN components) sort last
        scored.sort_unstable_by(|(a, sa), (b, sb)| {
            sb.partial_cmp(sa)
                .unwrap_or_else(|| sa.is_nan().cmp(&sb.is_nan()))
                .then_with(|| a.id.cmp(&b.id))
        });

        if top_k > 0 && top_k < scored.len() {
            scored.truncate(top_k);
        }
        scored
    }
}
