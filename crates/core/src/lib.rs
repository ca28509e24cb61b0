//! Core types for RayDB
//!
//! Shared by the engine crate and the public facade:
//! - [`Value`]: metadata value with structural equality
//! - [`Timestamp`]: item creation/modification time
//! - [`VectorItem`], [`SearchHit`], [`MetadataFilter`]: vector primitive types
//! - [`VectorError`]: engine error type

#![warn(missing_docs)]

pub mod error;
pub mod primitives;
pub mod types;
pub mod value;

pub use error::{VectorError, VectorResult};
pub use primitives::{
    CollectionStats, EngineStats, IndexingConfig, Metadata, MetadataFilter, NewItem, SearchHit,
    VectorItem, DEFAULT_INDEXING_STRATEGY,
};
pub use types::Timestamp;
pub use value::Value;
