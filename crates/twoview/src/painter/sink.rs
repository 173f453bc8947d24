//! Render-sink seam and a recording implementation.

use nalgebra::Vector2;

use crate::embedding::VertexId;

/// Device that receives draw calls from `GraphPainter::paint`.
///
/// Per pass: `begin_graph`, `begin_edges`, every `paint_edge`,
/// `begin_vertices`, every `paint_vertex`.
pub trait PaintSink {
    fn begin_graph(&mut self);
    fn begin_edges(&mut self);
    fn begin_vertices(&mut self);
    fn paint_edge(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        from_id: VertexId,
        to_id: VertexId,
        highlighted: bool,
    );
    fn paint_vertex(&mut self, at: Vector2<f64>, id: VertexId);
}

/// One recorded sink call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BeginGraph,
    BeginEdges,
    BeginVertices,
    Edge {
        from: Vector2<f64>,
        to: Vector2<f64>,
        from_id: VertexId,
        to_id: VertexId,
        highlighted: bool,
    },
    Vertex {
        at: Vector2<f64>,
        id: VertexId,
    },
}

/// Recording sink.
impl PaintSink for Vec<DrawCall> {
    fn begin_graph(&mut self) {
        self.push(DrawCall::BeginGraph);
    }

    fn begin_edges(&mut self) {
        self.push(DrawCall::BeginEdges);
    }

    fn begin_vertices(&mut self) {
        self.push(DrawCall::BeginVertices);
    }

    fn paint_edge(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        from_id: VertexId,
        to_id: VertexId,
        highlighted: bool,
    ) {
        self.push(DrawCall::Edge {
            from,
            to,
            from_id,
            to_id,
            highlighted,
        });
    }

    fn paint_vertex(&mut self, at: Vector2<f64>, id: VertexId) {
        self.push(DrawCall::Vertex { at, id });
    }
}
