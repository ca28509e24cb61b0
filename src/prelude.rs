//! Convenient imports for RayDB.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use raydb::prelude::*;
//!
//! let db = RayDb::with_dimension(3)?;
//! db.vectors.create_collection("docs")?;
//! # Ok::<(), raydb::Error>(())
//! ```

// Main entry point
pub use crate::database::{RayDb, RayDbBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Primitives
pub use crate::primitives::Vectors;

// Core types
pub use crate::types::{metadata, Metadata, Timestamp, Value};

// Vector types
pub use crate::types::{EngineStats, MetadataFilter, NewItem, SearchHit, VectorItem};
