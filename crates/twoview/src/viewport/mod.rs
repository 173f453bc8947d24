//! Viewport fitting and coordinate quantization.
//!
//! Purpose
//! - Map graph-space coordinates into an arbitrary (possibly axis-flipped)
//!   device rectangle with one uniform scale, centered, never dividing by zero.
//! - Snap device coordinates to a fine grid (`delta`) so repeated fits of the
//!   same inputs give identical points.
//!
//! Model
//! - `delta = min(w / horRng, h / verRng) / 1e6` (axes crossed for a
//!   degenerate box), `scale = max(delta, min(horRng / (w + delta), verRng / (h + delta)))`.
//! - Offsets center `[min, max + delta·sign]` per axis; a decreasing viewport
//!   range mirrors that axis.
//!
//! Code cross-refs: `embedding::BoundingBox`, `painter::GraphPainter`

mod fit;
mod types;

pub use fit::Fit;
pub use types::{AxisRange, AxisSign, FitCfg, Viewport, ViewportError};
