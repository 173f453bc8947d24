//! Uniform scale + per-axis offsets fitting a bounding box into a viewport,
//! and the quantizing forward map / unquantized inverse built on it.

use nalgebra::Vector2;

use super::types::{FitCfg, Viewport};
use crate::embedding::BoundingBox;

/// Fitted transform parameters.
///
/// Invariants: `delta > 0` and `scale > 0`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub delta: f64,
    pub hor_offset: f64,
    pub ver_offset: f64,
    pub viewport: Viewport,
}

impl Fit {
    /// Fit `bbox` into `viewport`, centered, with one `delta` of margin.
    pub fn compute(bbox: &BoundingBox, viewport: &Viewport, cfg: FitCfg) -> Self {
        let (hor, ver) = (viewport.hor, viewport.ver);
        let hor_rng = hor.range();
        let ver_rng = ver.range();
        let (w, h) = (bbox.width(), bbox.height());

        // Degenerate boxes cross the axes so a single-axis spread still yields a step.
        let mut delta = if bbox.is_degenerate() {
            (w / ver_rng).max(h / hor_rng) / cfg.delta_divisor
        } else {
            (w / hor_rng).min(h / ver_rng) / cfg.delta_divisor
        };
        if !(delta.is_finite() && delta > 0.0) {
            tracing::warn!(delta, w, h, hor_rng, ver_rng, "delta fallback");
            delta = 1.0 / cfg.delta_divisor;
        }

        let scale = delta.max((hor_rng / (w + delta)).min(ver_rng / (h + delta)));

        let hs = hor.sign.factor();
        let vs = ver.sign.factor();
        let hor_offset =
            (bbox.x_min + bbox.x_max + delta * hs) / 2.0 * scale * hs - hor_rng / 2.0 - hor.min;
        let ver_offset =
            (bbox.y_min + bbox.y_max + delta * vs) / 2.0 * scale * vs - ver_rng / 2.0 - ver.min;

        tracing::debug!(scale, delta, hor_offset, ver_offset, "viewport fit");
        Self {
            scale,
            delta,
            hor_offset,
            ver_offset,
            viewport: *viewport,
        }
    }

    /// Graph → device, rounded to the nearest multiple of `delta` (ties away
    /// from zero) on a grid anchored at the viewport minimum.
    #[inline]
    pub fn forward(&self, p: Vector2<f64>) -> Vector2<f64> {
        let (hor, ver) = (self.viewport.hor, self.viewport.ver);
        let x = quantize(
            p.x * self.scale * hor.sign.factor() - self.hor_offset - hor.min,
            self.delta,
        ) + hor.min;
        let y = quantize(
            p.y * self.scale * ver.sign.factor() - self.ver_offset - ver.min,
            self.delta,
        ) + ver.min;
        Vector2::new(x, y)
    }

    /// Device → graph. Exact undo of the unquantized forward map only.
    #[inline]
    pub fn inverse(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            (p.x + self.hor_offset) / self.scale * self.viewport.hor.sign.factor(),
            (p.y + self.ver_offset) / self.scale * self.viewport.ver.sign.factor(),
        )
    }

    /// Device-space images of the `(min, min)` and `(max, max)` box corners.
    pub fn device_bounding_box(&self, bbox: &BoundingBox) -> [Vector2<f64>; 2] {
        [
            self.forward(bbox.min_corner()),
            self.forward(bbox.max_corner()),
        ]
    }
}

#[inline]
pub(super) fn quantize(v: f64, delta: f64) -> f64 {
    (v / delta).round() * delta
}
