//! Render orchestration: owns the graph, the fitted transform, the
//! transformed-point cache, and the lazily determined pentagon set.
//!
//! Purpose
//! - Accept graph and viewport in either order; geometry becomes available
//!   once both are present.
//! - Recompute the point cache whenever graph or viewport changes; determine
//!   pentagons at most once per assigned graph, on the first highlighted paint.
//! - Emit draw calls in a fixed order: graph, edges (each undirected edge once,
//!   vertices high to low), vertices (high to low).
//!
//! Single owner, no internal locking: callers sharing a painter across threads
//! wrap it in their own mutex.
//!
//! Code cross-refs: `viewport::Fit`, `pentagon::detect_pentagons`, `PaintSink`

mod cache;
mod sink;

use std::fmt;

use nalgebra::Vector2;

use crate::embedding::{BoundingBox, GraphSource, VertexId};
use crate::pentagon::{detect_pentagons, MalformedEmbedding, PentagonSet};
use crate::viewport::{Fit, FitCfg, Viewport, ViewportError};

pub use cache::Cached;
pub use sink::{DrawCall, PaintSink};

/// Errors reported by painter queries and paint passes.
#[derive(Clone, Debug, PartialEq)]
pub enum PainterError {
    /// No graph has been assigned yet.
    NoGraph,
    /// No paint area has been set yet.
    NoViewport,
    /// The assigned graph has no vertices, so there is nothing to fit.
    EmptyGraph,
    /// A vertex id outside `1..=n`.
    UnknownVertex(VertexId),
    /// The paint area was rejected.
    Viewport(ViewportError),
    /// The rotation system is inconsistent.
    Malformed(MalformedEmbedding),
}

impl fmt::Display for PainterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PainterError::NoGraph => write!(f, "no graph assigned"),
            PainterError::NoViewport => write!(f, "no paint area set"),
            PainterError::EmptyGraph => write!(f, "graph has no vertices"),
            PainterError::UnknownVertex(v) => write!(f, "vertex {v} is not part of the graph"),
            PainterError::Viewport(e) => write!(f, "{e}"),
            PainterError::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PainterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PainterError::Viewport(e) => Some(e),
            PainterError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedEmbedding> for PainterError {
    fn from(e: MalformedEmbedding) -> Self {
        PainterError::Malformed(e)
    }
}

impl From<ViewportError> for PainterError {
    fn from(e: ViewportError) -> Self {
        PainterError::Viewport(e)
    }
}

/// Paints a planar embedding into a viewport.
#[derive(Debug)]
pub struct GraphPainter<G> {
    cfg: FitCfg,
    graph: Option<G>,
    bbox: Option<BoundingBox>,
    viewport: Option<Viewport>,
    fit: Cached<Fit>,
    /// `points[v - 1]` is the device position of vertex `v`.
    points: Cached<Vec<Vector2<f64>>>,
    pentagons: Cached<PentagonSet>,
    highlight_pentagons: bool,
}

impl<G> Default for GraphPainter<G> {
    fn default() -> Self {
        Self::new(FitCfg::default())
    }
}

impl<G> GraphPainter<G> {
    pub fn new(cfg: FitCfg) -> Self {
        Self {
            cfg,
            graph: None,
            bbox: None,
            viewport: None,
            fit: Cached::Invalid,
            points: Cached::Invalid,
            pentagons: Cached::Invalid,
            highlight_pentagons: false,
        }
    }

    #[inline]
    pub fn graph(&self) -> Option<&G> {
        self.graph.as_ref()
    }

    #[inline]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Bounding box of the raw coordinates; `None` without a non-empty graph.
    #[inline]
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Only flips the flag; detection waits for the next paint.
    #[inline]
    pub fn set_highlight_pentagons(&mut self, on: bool) {
        self.highlight_pentagons = on;
    }

    #[inline]
    pub fn highlight_pentagons(&self) -> bool {
        self.highlight_pentagons
    }

    /// Current transform, once graph and viewport are both present.
    pub fn fit(&self) -> Result<&Fit, PainterError> {
        if self.graph.is_none() {
            return Err(PainterError::NoGraph);
        }
        if self.viewport.is_none() {
            return Err(PainterError::NoViewport);
        }
        self.fit.get().ok_or(PainterError::EmptyGraph)
    }

    /// Graph → device for an arbitrary coordinate.
    pub fn forward(&self, x: f64, y: f64) -> Result<Vector2<f64>, PainterError> {
        Ok(self.fit()?.forward(Vector2::new(x, y)))
    }

    /// Device → graph for an arbitrary device position.
    pub fn inverse(&self, px: f64, py: f64) -> Result<Vector2<f64>, PainterError> {
        Ok(self.fit()?.inverse(Vector2::new(px, py)))
    }

    /// Device-space corners of the fitted bounding box.
    pub fn device_bounding_box(&self) -> Result<[Vector2<f64>; 2], PainterError> {
        let fit = self.fit()?;
        let bbox = self.bbox.as_ref().ok_or(PainterError::EmptyGraph)?;
        Ok(fit.device_bounding_box(bbox))
    }

    /// Cached device position of vertex `v`.
    pub fn point(&self, v: VertexId) -> Result<Vector2<f64>, PainterError> {
        let points = self.points()?;
        if v == 0 {
            return Err(PainterError::UnknownVertex(v));
        }
        points
            .get(v - 1)
            .copied()
            .ok_or(PainterError::UnknownVertex(v))
    }

    fn points(&self) -> Result<&[Vector2<f64>], PainterError> {
        if self.graph.is_none() {
            return Err(PainterError::NoGraph);
        }
        self.points
            .get()
            .map(Vec::as_slice)
            .ok_or(PainterError::NoViewport)
    }

    /// Remove the graph, dropping every derived artifact.
    pub fn take_graph(&mut self) -> Option<G> {
        self.bbox = None;
        self.fit.invalidate();
        self.points.invalidate();
        self.pentagons.invalidate();
        self.graph.take()
    }
}

impl<G: GraphSource> GraphPainter<G> {
    /// Number of vertices of the assigned graph (0 without one).
    pub fn graph_size(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.size())
    }

    /// Assign a graph: recompute the bounding box and fit, forget pentagons.
    pub fn set_graph(&mut self, graph: G) {
        self.bbox = BoundingBox::from_points(graph.coordinates());
        self.graph = Some(graph);
        self.pentagons.invalidate();
        self.refit();
    }

    /// Set the paint area. A range given high-to-low flips that axis.
    pub fn set_paint_area(
        &mut self,
        hor_min: f64,
        hor_max: f64,
        ver_min: f64,
        ver_max: f64,
    ) -> Result<(), PainterError> {
        let viewport = Viewport::new((hor_min, hor_max), (ver_min, ver_max))?;
        self.set_viewport(viewport);
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.refit();
    }

    fn refit(&mut self) {
        self.fit.invalidate();
        self.points.invalidate();
        let (Some(graph), Some(viewport)) = (self.graph.as_ref(), self.viewport.as_ref()) else {
            return;
        };
        match self.bbox.as_ref() {
            Some(bbox) => {
                let fit = Fit::compute(bbox, viewport, self.cfg);
                let points = graph.coordinates().iter().map(|&p| fit.forward(p)).collect();
                self.fit = Cached::Valid(fit);
                self.points = Cached::Valid(points);
            }
            None => self.points = Cached::Valid(Vec::new()),
        }
    }

    /// Pentagon set of the assigned graph, determining it if not yet known.
    pub fn pentagons(&mut self) -> Result<&PentagonSet, PainterError> {
        self.ensure_pentagons()?;
        self.pentagons.get().ok_or(PainterError::NoGraph)
    }

    fn ensure_pentagons(&mut self) -> Result<(), PainterError> {
        let graph = self.graph.as_ref().ok_or(PainterError::NoGraph)?;
        self.pentagons.try_fill(|| detect_pentagons(graph))?;
        Ok(())
    }

    /// One render pass into `sink`.
    ///
    /// With highlighting on, pentagons are determined first. A malformed
    /// embedding or an out-of-range neighbor id aborts the pass before any
    /// call reaches the sink.
    pub fn paint<S: PaintSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), PainterError> {
        if self.highlight_pentagons {
            self.ensure_pentagons()?;
        }
        let points = self.points()?;
        let Some(graph) = self.graph.as_ref() else {
            return Err(PainterError::NoGraph);
        };
        let pentagons = if self.highlight_pentagons {
            self.pentagons.get()
        } else {
            None
        };

        // Collect first so a bad neighbor id fails before the sink sees anything.
        let n = graph.size();
        let mut edges: Vec<(VertexId, VertexId, bool)> = Vec::new();
        for i in (1..=n).rev() {
            for j in graph.neighbors(i) {
                if j == 0 || j > n {
                    return Err(MalformedEmbedding::UnknownVertex {
                        vertex: i,
                        neighbor: j,
                    }
                    .into());
                }
                // Each undirected edge is drawn from its larger endpoint.
                if j >= i {
                    continue;
                }
                let highlighted = pentagons.is_some_and(|set| set.contains(i, j));
                edges.push((i, j, highlighted));
            }
        }

        sink.begin_graph();
        sink.begin_edges();
        for &(i, j, highlighted) in &edges {
            sink.paint_edge(points[i - 1], points[j - 1], i, j, highlighted);
        }
        sink.begin_vertices();
        for i in (1..=n).rev() {
            sink.paint_vertex(points[i - 1], i);
        }
        tracing::debug!(vertices = n, edges = edges.len(), "graph painted");
        Ok(())
    }
}
