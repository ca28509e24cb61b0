//! Vector primitive: storage and similarity search
//!
//! This module provides the in-memory vector engine. It includes:
//!
//! - **VectorEngine**: collections, item CRUD, batch insert, search, stats
//! - **EngineConfig**: dimension and descriptive indexing configuration
//! - **IndexStrategy**: trait for swappable scoring/ranking implementations
//! - **BruteForceStrategy**: exact O(n) cosine scan
//! - **cosine_similarity**: the scoring function

pub mod backend;
pub mod brute_force;
pub mod config;
pub mod similarity;
pub mod store;

pub use backend::{IndexStrategy, IndexStrategyFactory};
pub use brute_force::BruteForceStrategy;
pub use config::{EngineConfig, DEFAULT_DIMENSION};
pub use similarity::cosine_similarity;
pub use store::VectorEngine;
