//! Abstract planar-embedding graph source consumed by the painter.

use nalgebra::Vector2;

/// Vertex identifier. Vertices are numbered `1..=size()`; id 0 is never valid.
pub type VertexId = usize;

/// Read-only view of a planar embedding.
///
/// Invariants expected by consumers:
/// - `coordinates().len() == size()`; entry `k` belongs to vertex `k + 1`.
/// - `neighbors(v)` yields the rotation system of `v`: its neighbors in cyclic
///   angular order, with the same orientation for every vertex.
pub trait GraphSource {
    /// Forward-only cursor over one vertex's rotation.
    type Neighbors<'a>: Iterator<Item = VertexId> + 'a
    where
        Self: 'a;

    fn size(&self) -> usize;

    fn coordinates(&self) -> &[Vector2<f64>];

    /// Neighbors of `v` in rotation order. `v` must lie in `1..=size()`.
    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_>;
}

impl<T: GraphSource + ?Sized> GraphSource for &T {
    type Neighbors<'a>
        = T::Neighbors<'a>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn coordinates(&self) -> &[Vector2<f64>] {
        (**self).coordinates()
    }

    #[inline]
    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_> {
        (**self).neighbors(v)
    }
}
