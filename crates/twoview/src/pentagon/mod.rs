//! Pentagon face detection over a rotation system.
//!
//! Purpose
//! - Mark every edge that bounds a face with exactly five edges.
//!
//! Model
//! - A face trace starts on a directed edge `(tail, head)`. Each step finds
//!   `tail` in the rotation of `head` and moves to the neighbor just before it
//!   (cyclically); `head` becomes the new tail. Stepping to the neighbor just
//!   after it traces the face on the other side of the same edge.
//! - An edge lies on a pentagon iff either trace is back on `(tail, head)`
//!   after exactly five steps.
//! - Rotation positions are precomputed per vertex, so each step is O(1).
//!
//! Code cross-refs: `embedding::GraphSource`, `painter::GraphPainter::pentagons`

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::embedding::{GraphSource, VertexId};

/// Number of edges bounding the faces we look for.
pub const PENTAGON_LEN: usize = 5;

/// The rotation system is inconsistent with itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedEmbedding {
    /// `neighbor` reaches `vertex`, but `vertex`'s rotation does not list `neighbor`.
    MissingReverse { vertex: VertexId, neighbor: VertexId },
    /// A rotation names a vertex outside `1..=n`.
    UnknownVertex { vertex: VertexId, neighbor: VertexId },
}

impl fmt::Display for MalformedEmbedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReverse { vertex, neighbor } => write!(
                f,
                "malformed embedding: vertex {neighbor} not found in list of neighbours of {vertex}"
            ),
            Self::UnknownVertex { vertex, neighbor } => write!(
                f,
                "malformed embedding: vertex {vertex} lists unknown neighbour {neighbor}"
            ),
        }
    }
}

impl std::error::Error for MalformedEmbedding {}

/// Which neighbor a trace step moves to, relative to the incoming vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Previous,
    Next,
}

/// Symmetric set of edges lying on some pentagonal face.
///
/// Pairs are stored once, normalized as `(larger, smaller)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PentagonSet {
    edges: HashSet<(VertexId, VertexId)>,
}

impl PentagonSet {
    #[inline]
    fn key(i: VertexId, j: VertexId) -> (VertexId, VertexId) {
        (i.max(j), i.min(j))
    }

    fn insert(&mut self, i: VertexId, j: VertexId) {
        self.edges.insert(Self::key(i, j));
    }

    /// Membership of the undirected edge `{i, j}`; symmetric in its arguments.
    #[inline]
    pub fn contains(&self, i: VertexId, j: VertexId) -> bool {
        self.edges.contains(&Self::key(i, j))
    }

    /// Number of undirected pentagon edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges as `(i, j)` with `j < i`, sorted.
    pub fn to_sorted_vec(&self) -> Vec<(VertexId, VertexId)> {
        let mut v: Vec<_> = self.edges.iter().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().copied()
    }
}

/// Rotation lists plus, per vertex, the position of each neighbor in its rotation.
struct Rotations {
    lists: Vec<Vec<VertexId>>,
    positions: Vec<HashMap<VertexId, usize>>,
}

impl Rotations {
    fn collect<G: GraphSource + ?Sized>(graph: &G) -> Result<Self, MalformedEmbedding> {
        let n = graph.size();
        // Index 0 is the unused sentinel vertex.
        let mut lists = Vec::with_capacity(n + 1);
        let mut positions = Vec::with_capacity(n + 1);
        lists.push(Vec::new());
        positions.push(HashMap::new());
        for v in 1..=n {
            let list: Vec<VertexId> = graph.neighbors(v).collect();
            let mut pos = HashMap::with_capacity(list.len());
            for (k, &w) in list.iter().enumerate() {
                if w == 0 || w > n {
                    return Err(MalformedEmbedding::UnknownVertex {
                        vertex: v,
                        neighbor: w,
                    });
                }
                // First occurrence wins, matching a linear search.
                pos.entry(w).or_insert(k);
            }
            lists.push(list);
            positions.push(pos);
        }
        Ok(Self { lists, positions })
    }

    /// One trace step from the directed edge `(tail, head)`.
    #[inline]
    fn step(
        &self,
        tail: VertexId,
        head: VertexId,
        side: Side,
    ) -> Result<(VertexId, VertexId), MalformedEmbedding> {
        let list = &self.lists[head];
        let k = *self.positions[head]
            .get(&tail)
            .ok_or(MalformedEmbedding::MissingReverse {
                vertex: head,
                neighbor: tail,
            })?;
        let len = list.len();
        let next = match side {
            Side::Previous => list[(k + len - 1) % len],
            Side::Next => list[(k + 1) % len],
        };
        Ok((head, next))
    }

    /// True iff the trace from `(v1, v2)` closes after exactly `PENTAGON_LEN` steps.
    fn closes_as_pentagon(
        &self,
        v1: VertexId,
        v2: VertexId,
        side: Side,
    ) -> Result<bool, MalformedEmbedding> {
        let (mut tail, mut head) = (v1, v2);
        for _ in 0..PENTAGON_LEN {
            (tail, head) = self.step(tail, head, side)?;
        }
        Ok(tail == v1 && head == v2)
    }

    fn edge_is_on_pentagon(&self, v1: VertexId, v2: VertexId) -> Result<bool, MalformedEmbedding> {
        Ok(self.closes_as_pentagon(v1, v2, Side::Previous)?
            || self.closes_as_pentagon(v1, v2, Side::Next)?)
    }
}

/// Determine pentagon membership for every edge of `graph`.
///
/// Visits vertices from `n` down to 1 and every directed edge out of each.
/// Fails on the first inconsistency in the rotation system.
pub fn detect_pentagons<G: GraphSource + ?Sized>(
    graph: &G,
) -> Result<PentagonSet, MalformedEmbedding> {
    let rot = Rotations::collect(graph)?;
    let mut set = PentagonSet::default();
    for i in (1..=graph.size()).rev() {
        for &j in &rot.lists[i] {
            if rot.edge_is_on_pentagon(i, j)? {
                set.insert(i, j);
            }
        }
    }
    tracing::debug!(
        vertices = graph.size(),
        pentagon_edges = set.len(),
        "pentagons determined"
    );
    Ok(set)
}
