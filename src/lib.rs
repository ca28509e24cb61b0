//! # RayDB
//!
//! Embeddable in-memory vector store.
//!
//! RayDB holds named collections of fixed-dimension vectors with attached
//! metadata and answers nearest-neighbor queries by exact cosine similarity,
//! with optional metadata filtering.
//!
//! ## Quick Start
//!
//! ```
//! use raydb::prelude::*;
//!
//! let db = RayDb::with_dimension(3)?;
//! db.vectors.create_collection("col")?;
//! db.vectors.insert("col", "a", vec![1.0, 0.0, 0.0], metadata([("category", "A")]))?;
//! db.vectors.insert("col", "b", vec![0.0, 1.0, 0.0], metadata([("category", "B")]))?;
//!
//! let filter = MetadataFilter::new().eq("category", "A");
//! let hits = db.vectors.filter_search("col", &[1.0, 1.0, 0.0], 10, &filter)?;
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), raydb::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! One engine-wide reader/writer lock: mutations are exclusive and atomic,
//! reads run concurrently. Clone [`RayDb`] to share it across threads.
//!
//! ## Indexing
//!
//! Search is an exact O(n * d) scan. The indexing strategy label and
//! parameters are descriptive; a custom [`IndexStrategy`] can be supplied via
//! [`RayDbBuilder::strategy`].

#![warn(missing_docs)]

mod database;
mod error;
mod primitives;
mod types;

pub mod prelude;

// Re-export main entry points
pub use database::{RayDb, RayDbBuilder};
pub use error::{Error, Result};

// Re-export primitives
pub use primitives::Vectors;

// Re-export types
pub use types::*;
