//! Primitive facades exposed on [`crate::RayDb`].

mod vectors;

pub use vectors::Vectors;
