//! Main database entry point for RayDB.
//!
//! This module provides the `RayDb` struct, the primary entry point for
//! all vector store operations.

use crate::error::Result;
use crate::primitives::Vectors;
use crate::types::{EngineConfig, EngineStats, IndexStrategy, IndexingConfig, Value};
use raydb_primitives::{IndexStrategyFactory, VectorEngine};
use std::sync::Arc;

/// The RayDB vector store.
///
/// Owns one engine instance; there is no process-wide singleton. `RayDb` is
/// cheap to clone and every clone shares the same collections, so handles can
/// be passed to worker threads.
///
/// # Example
///
/// ```
/// use raydb::prelude::*;
///
/// let db = RayDb::builder().dimension(3).open()?;
/// db.vectors.create_collection("col")?;
/// db.vectors.insert("col", "a", vec![1.0, 0.0, 0.0], Metadata::new())?;
/// db.vectors.insert("col", "b", vec![0.0, 1.0, 0.0], Metadata::new())?;
///
/// let hits = db.vectors.search("col", &[1.0, 0.0, 0.0], 1)?;
/// assert_eq!(hits[0].item.id, "a");
/// # Ok::<(), raydb::Error>(())
/// ```
#[derive(Clone)]
pub struct RayDb {
    /// The underlying engine
    pub(crate) inner: Arc<VectorEngine>,

    /// Vector collections, items and similarity search
    pub vectors: Vectors,
}

impl RayDb {
    /// Open a store with the given vector dimension and default indexing.
    pub fn with_dimension(dimension: usize) -> Result<Self> {
        Self::builder().dimension(dimension).open()
    }

    /// Open a store from a full configuration.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        Self::builder().config(config).open()
    }

    /// Open a store from a JSON configuration document.
    ///
    /// ```
    /// let db = raydb::RayDb::from_json_config(r#"{"dimension": 8}"#)?;
    /// assert_eq!(db.dimension(), 8);
    /// # Ok::<(), raydb::Error>(())
    /// ```
    pub fn from_json_config(json: &str) -> Result<Self> {
        Self::from_config(EngineConfig::from_json_str(json)?)
    }

    /// Create a builder for store configuration.
    pub fn builder() -> RayDbBuilder {
        RayDbBuilder::new()
    }

    /// Configured vector dimension.
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Descriptive indexing configuration.
    pub fn indexing(&self) -> &IndexingConfig {
        self.inner.indexing()
    }

    /// Snapshot of per-collection counts and indexing configuration.
    pub fn stats(&self) -> EngineStats {
        self.inner.stats()
    }

    /// Statistics snapshot rendered as pretty-printed JSON.
    ///
    /// ```
    /// let db = raydb::RayDb::with_dimension(3)?;
    /// db.vectors.create_collection("col")?;
    /// let json = db.stats_json()?;
    /// assert!(json.contains("\"indexing_strategy\": \"brute_force\""));
    /// # Ok::<(), raydb::Error>(())
    /// ```
    pub fn stats_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.stats())?)
    }

    fn from_engine(engine: Arc<VectorEngine>) -> Self {
        Self {
            vectors: Vectors::new(Arc::clone(&engine)),
            inner: engine,
        }
    }
}

impl std::fmt::Debug for RayDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayDb").field("engine", &self.inner).finish()
    }
}

impl std::fmt::Debug for RayDbBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayDbBuilder")
            .field("config", &self.config)
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use raydb::RayDb;
///
/// let db = RayDb::builder()
///     .dimension(768)
///     .indexing_strategy("hnsw")
///     .parameter("m", 16)
///     .parameter("ef_construction", 200)
///     .open()?;
/// assert_eq!(db.stats().indexing_strategy, "hnsw");
/// # Ok::<(), raydb::Error>(())
/// ```
#[derive(Default)]
pub struct RayDbBuilder {
    config: EngineConfig,
    strategy: Option<Arc<dyn IndexStrategy>>,
}

impl RayDbBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the vector dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.config.dimension = dimension;
        self
    }

    /// Set the descriptive indexing strategy label.
    pub fn indexing_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.config.indexing.strategy = strategy.into();
        self
    }

    /// Add an indexing parameter (passed through unvalidated).
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.indexing.parameters.insert(key.into(), value.into());
        self
    }

    /// Rank search candidates with a custom strategy.
    pub fn strategy(mut self, strategy: Arc<dyn IndexStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Build the store.
    pub fn open(self) -> Result<RayDb> {
        let factory = match self.strategy {
            Some(strategy) => IndexStrategyFactory::Custom(strategy),
            None => IndexStrategyFactory::for_label(&self.config.indexing.strategy),
        };
        let engine = VectorEngine::with_strategy_factory(self.config, factory)?;
        Ok(RayDb::from_engine(Arc::new(engine)))
    }
}
