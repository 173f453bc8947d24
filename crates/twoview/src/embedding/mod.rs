//! Planar embeddings: the graph-source seam, an owned implementation, and the
//! raw-coordinate bounding box.
//!
//! Conventions
//! - Vertices are 1-indexed (`1..=n`); id 0 is a sentinel and never stored.
//! - A rotation lists a vertex's neighbors in cyclic angular order; all
//!   vertices share one orientation.
//!
//! Code cross-refs: `pentagon::detect_pentagons`, `painter::GraphPainter`

mod source;
mod types;

pub use source::{GraphSource, VertexId};
pub use types::{BoundingBox, Embedding, EmbeddingError};
