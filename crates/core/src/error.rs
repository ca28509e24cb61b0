//! Error types for vector engine operations

use thiserror::Error;

/// Errors raised by the vector engine
///
/// Every variant is local and recoverable. An operation that returns an error
/// has not mutated any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Vector length differs from the engine dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Configured dimension
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },

    /// Referenced collection does not exist
    #[error("collection not found: {name}")]
    CollectionNotFound {
        /// Collection name
        name: String,
    },

    /// Create on a name that is already taken
    #[error("collection already exists: {name}")]
    CollectionAlreadyExists {
        /// Collection name
        name: String,
    },

    /// Referenced id does not exist within an existing collection
    #[error("item not found: {id} in collection {collection}")]
    ItemNotFound {
        /// Collection name
        collection: String,
        /// Item id
        id: String,
    },

    /// Insert with an id already present in the collection
    #[error("duplicate id: {id} in collection {collection}")]
    DuplicateId {
        /// Collection name
        collection: String,
        /// Item id
        id: String,
    },

    /// Engine configured with an unusable dimension
    #[error("invalid dimension: {dimension} (must be > 0)")]
    InvalidDimension {
        /// The rejected dimension
        dimension: usize,
    },

    /// Engine configuration could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for vector engine operations
pub type VectorResult<T> = std::result::Result<T, VectorError>;

impl VectorError {
    /// Check if this is a collection or item not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            VectorError::CollectionNotFound { .. } | VectorError::ItemNotFound { .. }
        )
    }

    /// Check if this error is caused by a name or id collision
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            VectorError::CollectionAlreadyExists { .. } | VectorError::DuplicateId { .. }
        )
    }

    /// Shorthand for [`VectorError::CollectionNotFound`]
    pub fn collection_not_found(name: &str) -> Self {
        VectorError::CollectionNotFound {
            name: name.to_string(),
        }
    }
}
