//! Public types for the RayDB API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core value types
pub use raydb_core::Value;
pub use raydb_core::Timestamp;

// Vector types
pub use raydb_core::{
    CollectionStats, EngineStats, IndexingConfig, Metadata, MetadataFilter, NewItem, SearchHit,
    VectorItem,
};

// Engine configuration and strategy extension point
pub use raydb_primitives::{BruteForceStrategy, EngineConfig, IndexStrategy, DEFAULT_DIMENSION};

/// Build a [`Metadata`] map from key/value pairs.
///
/// ```
/// use raydb::{metadata, Value};
///
/// let m = metadata([("category", Value::from("A")), ("rank", Value::Int(1))]);
/// assert_eq!(m.len(), 2);
/// ```
pub fn metadata<K, V, I>(entries: I) -> Metadata
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
