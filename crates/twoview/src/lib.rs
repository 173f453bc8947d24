//! Core of the 2D embedding viewer.
//!
//! Two problems live here:
//! - fitting a graph's bounding box into a (possibly axis-flipped) device
//!   rectangle with a numerically safe, quantized affine map (`viewport`);
//! - marking every edge of a planar embedding that bounds a pentagonal face,
//!   by walking the rotation system (`pentagon`).
//!
//! `painter::GraphPainter` ties both to an external `PaintSink`. Drawing
//! primitives, UI events, and graph generation belong to callers.

pub mod api;
pub mod embedding;
pub mod painter;
pub mod pentagon;
pub mod viewport;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod properties;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::embedding::{BoundingBox, Embedding, EmbeddingError, GraphSource, VertexId};
    pub use crate::painter::{DrawCall, GraphPainter, PaintSink, PainterError};
    pub use crate::pentagon::{detect_pentagons, MalformedEmbedding, PentagonSet};
    pub use crate::viewport::{AxisSign, Fit, FitCfg, Viewport};
    pub use nalgebra::Vector2 as Vec2;
}
