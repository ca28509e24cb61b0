//! Vector similarity search primitive.
//!
//! The Vectors primitive provides collection management, item CRUD,
//! batch insertion, similarity search and metadata filtering.

use crate::error::Result;
use crate::types::{EngineStats, Metadata, MetadataFilter, NewItem, SearchHit, VectorItem};
use raydb_primitives::VectorEngine;
use std::sync::Arc;

/// Vector similarity search operations.
///
/// Access via `db.vectors`.
#[derive(Clone)]
pub struct Vectors {
    engine: Arc<VectorEngine>,
}

impl Vectors {
    pub(crate) fn new(engine: Arc<VectorEngine>) -> Self {
        Self { engine }
    }

    // =========================================================================
    // Collection management
    // =========================================================================

    /// Create an empty collection.
    ///
    /// Fails if the name is taken; never overwrites.
    pub fn create_collection(&self, name: &str) -> Result<()> {
        Ok(self.engine.create_collection(name)?)
    }

    /// Delete a collection and every item in it.
    pub fn delete_collection(&self, name: &str) -> Result<()> {
        Ok(self.engine.delete_collection(name)?)
    }

    /// List collection names, sorted.
    pub fn list_collections(&self) -> Vec<String> {
        self.engine.list_collections()
    }

    /// Check if a collection exists.
    pub fn collection_exists(&self, name: &str) -> bool {
        self.engine.collection_exists(name)
    }

    /// Count items in a collection.
    pub fn count(&self, collection: &str) -> Result<usize> {
        Ok(self.engine.count(collection)?)
    }

    // =========================================================================
    // Item operations
    // =========================================================================

    /// Insert a new vector.
    ///
    /// # Example
    ///
    /// ```
    /// use raydb::prelude::*;
    ///
    /// let db = RayDb::with_dimension(3)?;
    /// db.vectors.create_collection("docs")?;
    /// db.vectors.insert("docs", "doc-1", vec![0.1, 0.2, 0.3], metadata([("lang", "en")]))?;
    /// # Ok::<(), raydb::Error>(())
    /// ```
    pub fn insert(
        &self,
        collection: &str,
        id: &str,
        vector: Vec<f64>,
        metadata: Metadata,
    ) -> Result<()> {
        Ok(self.engine.insert(collection, id, vector, metadata)?)
    }

    /// Get a copy of a stored item.
    pub fn get(&self, collection: &str, id: &str) -> Result<VectorItem> {
        Ok(self.engine.get(collection, id)?)
    }

    /// Replace a vector, and its metadata when `Some`.
    pub fn update(
        &self,
        collection: &str,
        id: &str,
        vector: Vec<f64>,
        metadata: Option<Metadata>,
    ) -> Result<()> {
        Ok(self.engine.update(collection, id, vector, metadata)?)
    }

    /// Delete a vector.
    pub fn delete(&self, collection: &str, id: &str) -> Result<()> {
        Ok(self.engine.delete(collection, id)?)
    }

    /// Insert many vectors; applies all of them or none.
    pub fn batch_insert(&self, collection: &str, items: Vec<NewItem>) -> Result<()> {
        Ok(self.engine.batch_insert(collection, items)?)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Search for similar vectors.
    ///
    /// `k == 0` returns every match.
    pub fn search(&self, collection: &str, query: &[f64], k: usize) -> Result<Vec<SearchHit>> {
        Ok(self.engine.search(collection, query, k, None)?)
    }

    /// Search, keeping only items accepted by `predicate`.
    pub fn search_where<F>(
        &self,
        collection: &str,
        query: &[f64],
        k: usize,
        predicate: F,
    ) -> Result<Vec<SearchHit>>
    where
        F: Fn(&VectorItem) -> bool,
    {
        Ok(self.engine.search(collection, query, k, Some(&predicate))?)
    }

    /// Search restricted to items whose metadata equals every filter entry.
    pub fn filter_search(
        &self,
        collection: &str,
        query: &[f64],
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<SearchHit>> {
        Ok(self.engine.filter_search(collection, query, k, filter)?)
    }

    /// Search with score threshold.
    ///
    /// Returns only results with similarity score at or above the threshold.
    pub fn search_with_threshold(
        &self,
        collection: &str,
        query: &[f64],
        k: usize,
        threshold: f64,
    ) -> Result<Vec<SearchHit>> {
        let results = self.engine.search(collection, query, k, None)?;
        Ok(results.into_iter().filter(|h| h.score >= threshold).collect())
    }

    /// Snapshot of per-collection counts and indexing configuration.
    pub fn stats(&self) -> EngineStats {
        self.engine.stats()
    }
}
