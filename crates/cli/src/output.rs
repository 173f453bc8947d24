//! JSON shapes for recorded draw calls and fit summaries.

use serde::Serialize;
use twoview::api::{DrawCall, Fit, VertexId};
use twoview::Vec2;

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DrawRecord {
    BeginGraph,
    BeginEdges,
    BeginVertices,
    Edge {
        from: [f64; 2],
        to: [f64; 2],
        from_id: VertexId,
        to_id: VertexId,
        highlighted: bool,
    },
    Vertex {
        at: [f64; 2],
        id: VertexId,
    },
}

#[inline]
fn xy(p: Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

impl From<&DrawCall> for DrawRecord {
    fn from(c: &DrawCall) -> Self {
        match *c {
            DrawCall::BeginGraph => DrawRecord::BeginGraph,
            DrawCall::BeginEdges => DrawRecord::BeginEdges,
            DrawCall::BeginVertices => DrawRecord::BeginVertices,
            DrawCall::Edge {
                from,
                to,
                from_id,
                to_id,
                highlighted,
            } => DrawRecord::Edge {
                from: xy(from),
                to: xy(to),
                from_id,
                to_id,
                highlighted,
            },
            DrawCall::Vertex { at, id } => DrawRecord::Vertex { at: xy(at), id },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FitSummary {
    pub scale: f64,
    pub delta: f64,
    pub hor_offset: f64,
    pub ver_offset: f64,
    pub device_bounding_box: [[f64; 2]; 2],
}

impl FitSummary {
    pub fn new(fit: &Fit, corners: [Vec2<f64>; 2]) -> Self {
        Self {
            scale: fit.scale,
            delta: fit.delta,
            hor_offset: fit.hor_offset,
            ver_offset: fit.ver_offset,
            device_bounding_box: [xy(corners[0]), xy(corners[1])],
        }
    }
}
