//! Primitive types for RayDB
//!
//! This module defines the canonical data structures for the vector primitive.
//! These types are shared between the `primitives` crate and the facade.
//!
//! ## Design Principle
//!
//! - **raydb-core** defines canonical semantic types (this module)
//! - **raydb-primitives** provides the engine and implementation logic

pub mod vector;

pub use vector::{
    CollectionStats, EngineStats, IndexingConfig, Metadata, MetadataFilter, NewItem, SearchHit,
    VectorItem, DEFAULT_INDEXING_STRATEGY,
};
