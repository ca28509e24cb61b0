//! VectorEngine: vector storage and search primitive
//!
//! ## Design
//!
//! VectorEngine owns every collection. It holds:
//! - `RwLock<HashMap<String, VectorCollection>>` guarding all collections
//! - the fixed dimension and descriptive indexing configuration
//! - `Arc<dyn IndexStrategy>` used by `search` to score and rank candidates
//!
//! ## Thread Safety
//!
//! One engine-wide reader/writer lock. Mutations take the write lock and
//! complete their whole effect before releasing it; reads take the read lock.
//! A reader never observes a partially applied write. VectorEngine is
//! `Send + Sync` and can be shared across threads behind an `Arc`.
//!
//! ## Validation
//!
//! Every operation validates before mutating. `batch_insert` validates the
//! entire batch before committing any item: it applies all items or none.

use crate::vector::{EngineConfig, IndexStrategy, IndexStrategyFactory};
use parking_lot::RwLock;
use raydb_core::{
    CollectionStats, EngineStats, IndexingConfig, Metadata, MetadataFilter, NewItem, SearchHit,
    Timestamp, VectorError, VectorItem, VectorResult,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A named, independent namespace of items
#[derive(Debug, Default)]
struct VectorCollection {
    items: HashMap<String, VectorItem>,
}

impl VectorCollection {
    fn item_mut(&mut self, collection: &str, id: &str) -> VectorResult<&mut VectorItem> {
        self.items
            .get_mut(id)
            .ok_or_else(|| VectorError::ItemNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }
}

/// In-memory vector storage and search engine
///
/// # Example
///
/// ```
/// use raydb_primitives::{EngineConfig, VectorEngine};
/// use raydb_core::Metadata;
///
/// let engine = VectorEngine::new(EngineConfig::new(3)).unwrap();
/// engine.create_collection("col").unwrap();
/// engine.insert("col", "a", vec![1.0, 0.0, 0.0], Metadata::new()).unwrap();
/// engine.insert("col", "c", vec![1.0, 1.0, 0.0], Metadata::new()).unwrap();
///
/// let hits = engine.search("col", &[1.0, 0.0, 0.0], 1, None).unwrap();
/// assert_eq!(hits[0].item.id, "a");
/// ```
pub struct VectorEngine {
    collections: RwLock<HashMap<String, VectorCollection>>,
    dimension: usize,
    indexing: IndexingConfig,
    strategy: Arc<dyn IndexStrategy>,
}

impl VectorEngine {
    /// Create an engine; the strategy is picked from the configured label
    ///
    /// # Errors
    /// - `InvalidDimension` if the dimension is 0
    pub fn new(config: EngineConfig) -> VectorResult<Self> {
        let factory = IndexStrategyFactory::for_label(&config.indexing.strategy);
        Self::with_strategy_factory(config, factory)
    }

    /// Create an engine with a caller-supplied strategy
    pub fn with_strategy(
        config: EngineConfig,
        strategy: Arc<dyn IndexStrategy>,
    ) -> VectorResult<Self> {
        Self::with_strategy_factory(config, IndexStrategyFactory::Custom(strategy))
    }

    /// Create an engine from an explicit strategy factory
    pub fn with_strategy_factory(
        config: EngineConfig,
        factory: IndexStrategyFactory,
    ) -> VectorResult<Self> {
        config.validate()?;
        let strategy = factory.create();
        info!(
            "Vector engine ready: dimension={}, indexing={}, strategy={}",
            config.dimension,
            config.indexing.strategy,
            strategy.name()
        );
        Ok(VectorEngine {
            collections: RwLock::new(HashMap::new()),
            dimension: config.dimension,
            indexing: config.indexing,
            strategy,
        })
    }

    /// Configured vector dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Descriptive indexing configuration
    pub fn indexing(&self) -> &IndexingConfig {
        &self.indexing
    }

    /// Name of the strategy that ranks search candidates
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ========================================================================
    // Collection Management
    // ========================================================================

    /// Create an empty collection
    ///
    /// # Errors
    /// - `CollectionAlreadyExists` if the name is taken; the existing
    ///   collection is left untouched
    pub fn create_collection(&self, name: &str) -> VectorResult<()> {
        let mut collections = self.collections.write();
        if collections.contains_key(name) {
            return Err(VectorError::CollectionAlreadyExists {
                name: name.to_string(),
            });
        }
        collections.insert(name.to_string(), VectorCollection::default());
        info!("Created collection {}", name);
        Ok(())
    }

    /// Delete a collection and all its items
    ///
    /// # Errors
    /// - `CollectionNotFound` if the collection doesn't exist
    pub fn delete_collection(&self, name: &str) -> VectorResult<()> {
        let removed = self
            .collections
            .write()
            .remove(name)
            .ok_or_else(|| VectorError::collection_not_found(name))?;
        info!(
            "Deleted collection {} ({} items discarded)",
            name,
            removed.items.len()
        );
        Ok(())
    }

    /// Collection names, sorted
    pub fn list_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a collection exists
    pub fn collection_exists(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    /// Number of items in a collection
    pub fn count(&self, name: &str) -> VectorResult<usize> {
        self.collections
            .read()
            .get(name)
            .map(|c| c.items.len())
            .ok_or_else(|| VectorError::collection_not_found(name))
    }

    // ========================================================================
    // Item Operations
    // ========================================================================

    /// Insert a new item
    ///
    /// # Errors
    /// - `DimensionMismatch` if `vector.len() != dimension`
    /// - `CollectionNotFound` if the collection doesn't exist
    /// - `DuplicateId` if the id is already present; the stored item is
    ///   left unchanged
    pub fn insert(
        &self,
        collection: &str,
        id: &str,
        vector: Vec<f64>,
        metadata: Metadata,
    ) -> VectorResult<()> {
        self.check_dimension(&vector)?;

        let mut collections = self.collections.write();
        let coll = collections
            .get_mut(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?;

        if coll.items.contains_key(id) {
            return Err(VectorError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        let now = Timestamp::now();
        coll.items.insert(
            id.to_string(),
            VectorItem {
                id: id.to_string(),
                vector,
                metadata,
                created_at: now,
                updated_at: now,
            },
        );
        debug!("Inserted {} into {}", id, collection);
        Ok(())
    }

    /// Get a snapshot of an item
    ///
    /// The returned item is a copy; writes go through `insert`/`update`/`delete`.
    pub fn get(&self, collection: &str, id: &str) -> VectorResult<VectorItem> {
        let collections = self.collections.read();
        let coll = collections
            .get(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?;
        coll.items
            .get(id)
            .cloned()
            .ok_or_else(|| VectorError::ItemNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }

    /// Replace an item's vector, and its metadata when `Some`
    ///
    /// `None` leaves metadata unchanged; it does not clear it. `updated_at`
    /// is refreshed and never moves backwards; `created_at` is untouched.
    pub fn update(
        &self,
        collection: &str,
        id: &str,
        vector: Vec<f64>,
        metadata: Option<Metadata>,
    ) -> VectorResult<()> {
        self.check_dimension(&vector)?;

        let mut collections = self.collections.write();
        let item = collections
            .get_mut(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?
            .item_mut(collection, id)?;

        item.vector = vector;
        if let Some(metadata) = metadata {
            item.metadata = metadata;
        }
        item.updated_at = Timestamp::now_after(item.updated_at);
        debug!("Updated {} in {}", id, collection);
        Ok(())
    }

    /// Remove an item
    ///
    /// A second delete of the same id reports `ItemNotFound`; callers wanting
    /// idempotence treat that as "already deleted".
    pub fn delete(&self, collection: &str, id: &str) -> VectorResult<()> {
        let mut collections = self.collections.write();
        let coll = collections
            .get_mut(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?;

        coll.items
            .remove(id)
            .ok_or_else(|| VectorError::ItemNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        debug!("Deleted {} from {}", id, collection);
        Ok(())
    }

    /// Insert many items atomically
    ///
    /// The whole batch is validated under the write lock before any item is
    /// committed. On the first violation (in input order) nothing is applied.
    ///
    /// # Errors
    /// - `CollectionNotFound` if the collection doesn't exist
    /// - `DimensionMismatch` for a row with the wrong length
    /// - `DuplicateId` for an id already stored, or repeated within the batch
    pub fn batch_insert(&self, collection: &str, items: Vec<NewItem>) -> VectorResult<()> {
        let mut collections = self.collections.write();
        let coll = collections
            .get_mut(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
        for item in &items {
            let validated = self.check_dimension(&item.vector).and_then(|_| {
                if coll.items.contains_key(&item.id) || !seen.insert(item.id.as_str()) {
                    Err(VectorError::DuplicateId {
                        collection: collection.to_string(),
                        id: item.id.clone(),
                    })
                } else {
                    Ok(())
                }
            });
            if let Err(e) = validated {
                warn!(
                    "Rejected batch of {} items for {}: {}",
                    items.len(),
                    collection,
                    e
                );
                return Err(e);
            }
        }

        let count = items.len();
        let now = Timestamp::now();
        for item in items {
            let created_at = item.created_at.unwrap_or(now);
            coll.items.insert(
                item.id.clone(),
                VectorItem {
                    id: item.id,
                    vector: item.vector,
                    metadata: item.metadata,
                    created_at,
                    // A carried creation time from a skewed clock may be ahead of ours
                    updated_at: now.max(created_at),
                },
            );
        }
        debug!("Committed batch of {} items into {}", count, collection);
        Ok(())
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Similarity search with an optional predicate filter
    ///
    /// Results are ordered by cosine similarity descending. `top_k == 0` or
    /// `top_k >=` the number of matches returns every match. An empty
    /// collection, or a filter matching nothing, yields an empty vec.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `query.len() != dimension`
    /// - `CollectionNotFound` if the collection doesn't exist
    pub fn search(
        &self,
        collection: &str,
        query: &[f64],
        top_k: usize,
        filter: Option<&dyn Fn(&VectorItem) -> bool>,
    ) -> VectorResult<Vec<SearchHit>> {
        self.check_dimension(query)?;

        let collections = self.collections.read();
        let coll = collections
            .get(collection)
            .ok_or_else(|| VectorError::collection_not_found(collection))?;

        let candidates: Vec<&VectorItem> = match filter {
            Some(pred) => coll.items.values().filter(|item| pred(item)).collect(),
            None => coll.items.values().collect(),
        };
        let scanned = candidates.len();

        let hits: Vec<SearchHit> = self
            .strategy
            .score_and_rank(query, candidates, top_k)
            .into_iter()
            .map(|(item, score)| SearchHit {
                item: item.clone(),
                score,
            })
            .collect();

        debug!(
            "Search on {}: {} candidates, {} hits (top_k={})",
            collection,
            scanned,
            hits.len(),
            top_k
        );
        Ok(hits)
    }

    /// Similarity search restricted to items whose metadata equals every
    /// entry of `filters`
    pub fn filter_search(
        &self,
        collection: &str,
        query: &[f64],
        top_k: usize,
        filters: &MetadataFilter,
    ) -> VectorResult<Vec<SearchHit>> {
        let pred = |item: &VectorItem| filters.matches(&item.metadata);
        self.search(collection, query, top_k, Some(&pred))
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Consistent snapshot of per-collection counts and indexing config
    pub fn stats(&self) -> EngineStats {
        let collections = self.collections.read();
        EngineStats {
            collections: collections
                .iter()
                .map(|(name, c)| {
                    (
                        name.clone(),
                        CollectionStats {
                            count: c.items.len(),
                        },
                    )
                })
                .collect(),
            indexing_strategy: self.indexing.strategy.clone(),
            indexing_parameters: self.indexing.parameters.clone(),
            dimension: self.dimension,
        }
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn check_dimension(&self, vector: &[f64]) -> VectorResult<()> {
        if vector.len() != self.dimension {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for VectorEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorEngine")
            .field("dimension", &self.dimension)
            .field("indexing", &self.indexing)
            .field("strategy", &self.strategy.name())
            .finish_non_exhaustive()
    }
}
