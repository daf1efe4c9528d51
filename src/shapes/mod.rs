//! Shape definitions and the piece catalog.
//!
//! A `ShapeDef` is the immutable footprint of a piece; the `ShapeCatalog`
//! registers every shape once at startup and is never mutated afterwards.

pub mod catalog;
pub mod definition;

pub use catalog::ShapeCatalog;
pub use definition::{BlockColor, Offset, ShapeDef, ShapeId, ShapeTier};
