//! Index strategy trait
//!
//! Defines the interface for swappable scoring/ranking implementations.
//! `BruteForceStrategy` (exact O(n) scan) is the only shipped strategy; an
//! approximate index can be substituted without changing `search`.

use raydb_core::{VectorItem, DEFAULT_INDEXING_STRATEGY};
use std::sync::Arc;
use tracing::warn;

/// Trait for swappable search strategies
///
/// Implementations receive every candidate that passed the caller's filter and
/// return them scored and ranked. The engine holds the read lock for the
/// duration of the call.
///
/// Results must be sorted by score descending, scores must be "higher = more
/// similar", and at most `top_k` results are returned (`top_k == 0` means
/// unbounded).
pub trait IndexStrategy: Send + Sync {
    /// Strategy label, reported alongside the configured indexing name
    fn name(&self) -> &str;

    /// Score and rank candidates against the query
    fn score_and_rank<'a>(
        &self,
        query: &[f64],
        candidates: Vec<&'a VectorItem>,
        top_k: usize,
    ) -> Vec<(&'a VectorItem, f64)>;
}

/// Factory for creating index strategies
///
/// Maps the configured strategy label to an implementation. Labels with no
/// implementation yet (e.g. "hnsw") fall back to brute force, so the label
/// stays descriptive until an index ships.
#[derive(Clone, Default)]
pub enum IndexStrategyFactory {
    /// Exact O(n) scan
    #[default]
    BruteForce,
    /// Caller-supplied strategy
    Custom(Arc<dyn IndexStrategy>),
}

impl IndexStrategyFactory {
    /// Pick a factory for a configured label
    pub fn for_label(label: &str) -> Self {
        match label {
            DEFAULT_INDEXING_STRATEGY => IndexStrategyFactory::BruteForce,
            other => {
                warn!(
                    "No index implementation for strategy {:?}, ranking with brute force",
                    other
                );
                IndexStrategyFactory::BruteForce
            }
        }
    }

    /// Create a new strategy instance
    pub fn create(&self) -> Arc<dyn IndexStrategy> {
        match self {
            IndexStrategyFactory::BruteForce => Arc::new(super::brute_force::BruteForceStrategy),
            IndexStrategyFactory::Custom(strategy) => Arc::clone(strategy),
        }
    }
}

impl std::fmt::Debug for IndexStrategyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexStrategyFactory::BruteForce => write!(f, "BruteForce"),
            IndexStrategyFactory::Custom(s) => write!(f, "Custom({})", s.name()),
        }
    }
}
