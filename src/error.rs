//! Unified error types for RayDB.
//!
//! This module provides a clean error type that wraps engine errors
//! and presents a consistent interface to users.

use raydb_core::VectorError;
use thiserror::Error;

/// All RayDB errors.
///
/// Lookup and conflict failures keep the collection and id they refer to, so
/// callers can match on the kind without parsing messages.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Referenced collection does not exist
    #[error("collection not found: {name}")]
    CollectionNotFound {
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

    /// Collection name already taken
    #[error("collection already exists: {name}")]
    CollectionAlreadyExists {
        /// Collection name
        name: String,
    },

    /// Item id already present in the collection
    #[error("duplicate id: {id} in collection {collection}")]
    DuplicateId {
        /// Collection name
        collection: String,
        /// Item id
        id: String,
    },

    /// Vector length differs from the configured dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Configured dimension
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Invalid configuration or input
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for RayDB operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a missing collection or item.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CollectionNotFound { .. } | Error::ItemNotFound { .. }
        )
    }

    /// Check if this is a name or id collision.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Error::CollectionAlreadyExists { .. } | Error::DuplicateId { .. }
        )
    }
}

// Convert from engine errors
impl From<VectorError> for Error {
    fn from(e: VectorError) -> Self {
        match e {
            VectorError::DimensionMismatch { expected, actual } => {
                Error::DimensionMismatch { expected, actual }
            }
            VectorError::CollectionNotFound { name } => Error::CollectionNotFound { name },
            VectorError::ItemNotFound { collection, id } => Error::ItemNotFound { collection, id },
            VectorError::CollectionAlreadyExists { name } => {
                Error::CollectionAlreadyExists { name }
            }
            VectorError::DuplicateId { collection, id } => Error::DuplicateId { collection, id },
            e @ VectorError::InvalidDimension { .. } => Error::ConstraintViolation(e.to_string()),
            VectorError::InvalidConfig(msg) => Error::ConstraintViolation(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
