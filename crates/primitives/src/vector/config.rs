//! Engine configuration
//!
//! Built once at startup, before any request is served. The dimension is
//! fixed for the lifetime of the engine; changing it requires a new engine.

use raydb_core::{IndexingConfig, Value, VectorError, VectorResult};
use serde::{Deserialize, Serialize};

/// Default embedding dimension (MiniLM-sized)
pub const DEFAULT_DIMENSION: usize = 384;

/// Construction-time engine configuration
///
/// Deserializable so a startup layer can load it from JSON:
///
/// ```
/// use raydb_primitives::EngineConfig;
///
/// let config = EngineConfig::from_json_str(
///     r#"{"dimension": 3, "indexing": {"strategy": "hnsw", "parameters": {"m": 16}}}"#,
/// ).unwrap();
/// assert_eq!(config.dimension, 3);
/// assert_eq!(config.indexing.strategy, "hnsw");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length every stored and query vector must have
    pub dimension: usize,
    /// Descriptive indexing configuration
    pub indexing: IndexingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            dimension: DEFAULT_DIMENSION,
            indexing: IndexingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the given dimension and default indexing
    pub fn new(dimension: usize) -> Self {
        EngineConfig {
            dimension,
            ..Default::default()
        }
    }

    /// Set the indexing strategy label
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.indexing.strategy = strategy.into();
        self
    }

    /// Add an indexing parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.indexing.parameters.insert(key.into(), value.into());
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> VectorResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(s).map_err(|e| VectorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject unusable configurations
    pub fn validate(&self) -> VectorResult<()> {
        if self.dimension == 0 {
            return Err(VectorError::InvalidDimension {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}
