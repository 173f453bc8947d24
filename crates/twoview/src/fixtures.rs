//! Small straight-line planar drawings shared by unit and property tests.

use nalgebra::Vector2;

use crate::embedding::{Embedding, VertexId};

/// Regular `k`-gon of radius `r`, first vertex at angle `phase` (radians).
pub fn ring(k: usize, r: f64, phase: f64) -> Vec<Vector2<f64>> {
    (0..k)
        .map(|i| {
            let th = phase + std::f64::consts::TAU * (i as f64) / (k as f64);
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

/// Cycle edges `offset+1 .. offset+k` closing back on `offset+1`.
pub fn ring_edges(k: usize, offset: usize) -> Vec<(VertexId, VertexId)> {
    (1..=k)
        .map(|i| (offset + i, offset + i % k + 1))
        .collect()
}

pub fn cycle(k: usize) -> Embedding {
    Embedding::from_straight_line(ring(k, 1.0, 0.0), &ring_edges(k, 0)).unwrap()
}

/// Outer and inner pentagon joined by five spokes (vertices 1..=5 outer, 6..=10 inner).
pub fn pentagonal_prism() -> Embedding {
    let phase = std::f64::consts::FRAC_PI_2;
    let mut coords = ring(5, 2.0, phase);
    coords.extend(ring(5, 1.0, phase));
    let mut edges = ring_edges(5, 0);
    edges.extend(ring_edges(5, 5));
    edges.extend((1..=5).map(|i| (i, i + 5)));
    Embedding::from_straight_line(coords, &edges).unwrap()
}

/// Square 1-2-3-4 with a roof apex 5 over the 3-4 side; its outer face is a pentagon.
pub fn house() -> Embedding {
    let coords = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(1.0, 3.0),
    ];
    let edges = [(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 4)];
    Embedding::from_straight_line(coords, &edges).unwrap()
}

/// Cube as two nested squares: every face is a quadrilateral.
pub fn cube() -> Embedding {
    let phase = std::f64::consts::FRAC_PI_4;
    let mut coords = ring(4, 2.0, phase);
    coords.extend(ring(4, 1.0, phase));
    let mut edges = ring_edges(4, 0);
    edges.extend(ring_edges(4, 4));
    edges.extend((1..=4).map(|i| (i, i + 4)));
    Embedding::from_straight_line(coords, &edges).unwrap()
}

/// Schlegel diagram of the dodecahedron: twelve pentagonal faces, 30 edges.
///
/// Layers: outer ring 1..=5, middle zigzag 6..=10 / 11..=15, inner ring 16..=20.
pub fn dodecahedron() -> Embedding {
    let phase = std::f64::consts::FRAC_PI_2;
    let half = std::f64::consts::PI / 5.0;
    let mut coords = ring(5, 4.0, phase);
    coords.extend(ring(5, 3.0, phase));
    coords.extend(ring(5, 2.0, phase + half));
    coords.extend(ring(5, 1.0, phase + half));
    let mut edges = ring_edges(5, 0);
    edges.extend(ring_edges(5, 15));
    for k in 1..=5 {
        edges.push((k, k + 5));
        edges.push((k + 5, k + 10));
        edges.push((k + 10, 5 + k % 5 + 1));
        edges.push((k + 10, k + 15));
    }
    Embedding::from_straight_line(coords, &edges).unwrap()
}
