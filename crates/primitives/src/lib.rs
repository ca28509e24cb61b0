//! Primitives for RayDB
//!
//! The vector engine and its scoring strategies. Canonical types live in
//! `raydb-core`; the public entry point is the `raydb` facade crate.

#![warn(missing_docs)]

pub mod vector;

pub use vector::{
    cosine_similarity, BruteForceStrategy, EngineConfig, IndexStrategy, IndexStrategyFactory,
    VectorEngine, DEFAULT_DIMENSION,
};
