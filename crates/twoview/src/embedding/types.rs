//! Owned embedding and its bounding box.

use std::fmt;
use std::iter::Copied;
use std::slice;

use nalgebra::Vector2;

use super::source::{GraphSource, VertexId};

/// Errors raised while assembling an `Embedding`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbeddingError {
    /// `coordinates` and `rotation` disagree on the vertex count.
    LengthMismatch { coordinates: usize, rotation: usize },
    /// A rotation entry names a vertex outside `1..=n`.
    UnknownVertex { vertex: VertexId, neighbor: VertexId },
    /// A vertex lists itself as a neighbor.
    SelfLoop { vertex: VertexId },
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate { vertex: VertexId },
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                coordinates,
                rotation,
            } => write!(
                f,
                "embedding has {coordinates} coordinates but {rotation} rotation lists"
            ),
            Self::UnknownVertex { vertex, neighbor } => {
                write!(f, "vertex {vertex} lists unknown neighbor {neighbor}")
            }
            Self::SelfLoop { vertex } => write!(f, "vertex {vertex} lists itself as a neighbor"),
            Self::NonFiniteCoordinate { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for EmbeddingError {}

/// Planar embedding held in memory: one coordinate and one rotation per vertex.
///
/// Storage is 0-based (`rotation[v - 1]` is the rotation of vertex `v`); the
/// public API speaks 1-based vertex ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Embedding {
    coordinates: Vec<Vector2<f64>>,
    rotation: Vec<Vec<VertexId>>,
}

impl Embedding {
    /// Build from explicit rotation lists. Validates ids but not planarity or
    /// the symmetry of the adjacency; those surface later as face-tracing errors.
    pub fn new(
        coordinates: Vec<Vector2<f64>>,
        rotation: Vec<Vec<VertexId>>,
    ) -> Result<Self, EmbeddingError> {
        if coordinates.len() != rotation.len() {
            return Err(EmbeddingError::LengthMismatch {
                coordinates: coordinates.len(),
                rotation: rotation.len(),
            });
        }
        let n = coordinates.len();
        for (k, p) in coordinates.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(EmbeddingError::NonFiniteCoordinate { vertex: k + 1 });
            }
        }
        for (k, nbrs) in rotation.iter().enumerate() {
            let vertex = k + 1;
            for &neighbor in nbrs {
                if neighbor == 0 || neighbor > n {
                    return Err(EmbeddingError::UnknownVertex { vertex, neighbor });
                }
                if neighbor == vertex {
                    return Err(EmbeddingError::SelfLoop { vertex });
                }
            }
        }
        Ok(Self {
            coordinates,
            rotation,
        })
    }

    /// Build the rotation system of a straight-line drawing: each vertex's
    /// neighbors sorted counter-clockwise by the direction of the edge.
    pub fn from_straight_line(
        coordinates: Vec<Vector2<f64>>,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, EmbeddingError> {
        let n = coordinates.len();
        let mut rotation: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for &(a, b) in edges {
            for (vertex, neighbor) in [(a, b), (b, a)] {
                if vertex == 0 || vertex > n {
                    return Err(EmbeddingError::UnknownVertex {
                        vertex: neighbor,
                        neighbor: vertex,
                    });
                }
                if !rotation[vertex - 1].contains(&neighbor) {
                    rotation[vertex - 1].push(neighbor);
                }
            }
        }
        // Validate before sorting so ids are known to be in range.
        let mut emb = Self::new(coordinates, rotation)?;
        for k in 0..n {
            let origin = emb.coordinates[k];
            let coords = &emb.coordinates;
            emb.rotation[k].sort_by(|&u, &w| {
                let au = angle_of(coords[u - 1] - origin);
                let aw = angle_of(coords[w - 1] - origin);
                au.partial_cmp(&aw).unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        Ok(emb)
    }

    /// Rotation of `v` as a slice.
    ///
    /// Panics unless `v` lies in `1..=size()`.
    #[inline]
    pub fn rotation(&self, v: VertexId) -> &[VertexId] {
        &self.rotation[v - 1]
    }

    /// Number of undirected edges (directed adjacency entries halved).
    pub fn edge_count(&self) -> usize {
        self.rotation.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Each undirected edge once as `(i, j)` with `j < i`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.rotation.iter().enumerate().flat_map(|(k, nbrs)| {
            let i = k + 1;
            nbrs.iter().filter(move |&&j| j < i).map(move |&j| (i, j))
        })
    }
}

#[inline]
fn angle_of(d: Vector2<f64>) -> f64 {
    d.y.atan2(d.x)
}

impl GraphSource for Embedding {
    type Neighbors<'a> = Copied<slice::Iter<'a, VertexId>>;

    #[inline]
    fn size(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    fn coordinates(&self) -> &[Vector2<f64>] {
        &self.coordinates
    }

    #[inline]
    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_> {
        self.rotation[v - 1].iter().copied()
    }
}

/// Axis-aligned bounding box of the raw (graph-space) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Linear scan; `None` for an empty point set.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// All points share an x or a y coordinate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x_min == self.x_max || self.y_min == self.y_max
    }

    #[inline]
    pub fn min_corner(&self) -> Vector2<f64> {
        Vector2::new(self.x_min, self.y_min)
    }

    #[inline]
    pub fn max_corner(&self) -> Vector2<f64> {
        Vector2::new(self.x_max, self.y_max)
    }
}
