//! Curated surface for the CLI and other in-repo callers.
//!
//! Not a stability promise; re-exports move when modules do.

pub use crate::embedding::{BoundingBox, Embedding, EmbeddingError, GraphSource, VertexId};
pub use crate::painter::{Cached, DrawCall, GraphPainter, PaintSink, PainterError};
pub use crate::pentagon::{detect_pentagons, MalformedEmbedding, PentagonSet, PENTAGON_LEN};
pub use crate::viewport::{AxisRange, AxisSign, Fit, FitCfg, Viewport, ViewportError};
