//! Vector types for the VectorEngine primitive
//!
//! These types define stored items, search results, filters and engine
//! statistics. Implementation logic (similarity, ranking, locking) lives in
//! the primitives crate.

use crate::types::Timestamp;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item metadata: string keys to arbitrary values
pub type Metadata = BTreeMap<String, Value>;

/// Default strategy label, matching the shipped brute-force scan
pub const DEFAULT_INDEXING_STRATEGY: &str = "brute_force";

/// One stored vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorItem {
    /// Unique within the owning collection
    pub id: String,

    /// Embedding, always exactly the engine dimension long
    pub vector: Vec<f64>,

    /// Metadata used for equality filtering
    pub metadata: Metadata,

    /// Set once at creation
    pub created_at: Timestamp,

    /// Refreshed on every mutation of `vector` or `metadata`
    pub updated_at: Timestamp,
}

/// Input row for batch insertion
///
/// `created_at` may be carried over from an external source; when `None` the
/// engine stamps the commit time. `updated_at` is always the commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    /// Item id
    pub id: String,
    /// Embedding
    pub vector: Vec<f64>,
    /// Metadata
    #[serde(default)]
    pub metadata: Metadata,
    /// Optional pre-existing creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl NewItem {
    /// Create a new batch row with no metadata
    pub fn new(id: impl Into<String>, vector: Vec<f64>) -> Self {
        NewItem {
            id: id.into(),
            vector,
            metadata: Metadata::new(),
            created_at: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Carry over a creation time
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Search result entry
///
/// Score is the cosine similarity to the query, in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Snapshot of the matched item
    pub item: VectorItem,
    /// Similarity score (higher = more similar)
    pub score: f64,
}

/// Metadata filter for search (equality only)
///
/// All conditions must match (AND semantics). A missing key or an unequal
/// value excludes the item. Values compare structurally, see [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataFilter {
    /// Top-level key equality conditions
    pub equals: BTreeMap<String, Value>,
}

impl MetadataFilter {
    /// Create an empty filter (matches all)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality condition
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.insert(field.into(), value.into());
        self
    }

    /// Check if metadata matches this filter
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.equals
            .iter()
            .all(|(key, expected)| metadata.get(key).is_some_and(|actual| actual == expected))
    }

    /// Check if filter is empty (matches all)
    pub fn is_empty(&self) -> bool {
        self.equals.is_empty()
    }

    /// Get the number of conditions in the filter
    pub fn len(&self) -> usize {
        self.equals.len()
    }
}

impl From<Metadata> for MetadataFilter {
    fn from(equals: Metadata) -> Self {
        MetadataFilter { equals }
    }
}

/// Descriptive indexing configuration
///
/// Informational only: reported by `stats()` and passed through unvalidated.
/// The strategy that actually ranks candidates is chosen when the engine is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingConfig {
    /// Strategy label (e.g. "brute_force", "hnsw")
    pub strategy: String,
    /// Arbitrary strategy parameters
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        IndexingConfig {
            strategy: DEFAULT_INDEXING_STRATEGY.to_string(),
            parameters: BTreeMap::new(),
        }
    }
}

/// Per-collection statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Number of stored items
    pub count: usize,
}

/// Consistent snapshot of engine statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Item count per collection, sorted by name
    pub collections: BTreeMap<String, CollectionStats>,
    /// Configured strategy label
    pub indexing_strategy: String,
    /// Configured strategy parameters
    pub indexing_parameters: BTreeMap<String, Value>,
    /// Engine dimension
    pub dimension: usize,
}

impl EngineStats {
    /// Total number of items across all collections
    pub fn total_items(&self) -> usize {
        self.collections.values().map(|c| c.count).sum()
    }
}
