//! Property tests over random coordinate sets, viewports, and rotation systems.

use nalgebra::Vector2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::embedding::{BoundingBox, Embedding, GraphSource, VertexId};
use crate::painter::{DrawCall, GraphPainter};
use crate::pentagon::detect_pentagons;
use crate::viewport::{Fit, FitCfg, Viewport};

const N: usize = 10;

fn points(min_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), min_len..40)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

/// Axis range with extent in [1, 2000], supplied in either order.
fn axis() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, 1.0f64..2000.0, any::<bool>())
        .prop_map(|(lo, ext, rev)| if rev { (lo + ext, lo) } else { (lo, lo + ext) })
}

fn edges() -> impl Strategy<Value = Vec<(VertexId, VertexId)>> {
    prop::collection::vec((1..=N, 1..=N), 0..30)
        .prop_map(|v| v.into_iter().filter(|(a, b)| a != b).collect())
}

/// Same adjacency, every rotation shuffled: a valid (if non-planar) rotation system.
fn shuffled(emb: &Embedding, seed: u64) -> Embedding {
    let mut rng = StdRng::seed_from_u64(seed);
    let rotation = (1..=emb.size())
        .map(|v| {
            let mut r = emb.rotation(v).to_vec();
            r.shuffle(&mut rng);
            r
        })
        .collect();
    Embedding::new(emb.coordinates().to_vec(), rotation).unwrap()
}

proptest! {
    #[test]
    fn bounding_box_is_exact(pts in points(1)) {
        let b = BoundingBox::from_points(&pts).unwrap();
        let xs = pts.iter().map(|p| p.x);
        let ys = pts.iter().map(|p| p.y);
        prop_assert_eq!(b.x_min, xs.clone().fold(f64::INFINITY, f64::min));
        prop_assert_eq!(b.x_max, xs.fold(f64::NEG_INFINITY, f64::max));
        prop_assert_eq!(b.y_min, ys.clone().fold(f64::INFINITY, f64::min));
        prop_assert_eq!(b.y_max, ys.fold(f64::NEG_INFINITY, f64::max));
    }

    #[test]
    fn fit_is_positive_and_roundtrips(pts in points(1), hor in axis(), ver in axis()) {
        let b = BoundingBox::from_points(&pts).unwrap();
        let vp = Viewport::new(hor, ver).unwrap();
        let fit = Fit::compute(&b, &vp, FitCfg::default());
        prop_assert!(fit.delta.is_finite() && fit.delta > 0.0);
        prop_assert!(fit.scale.is_finite() && fit.scale > 0.0);
        prop_assert_eq!(fit, Fit::compute(&b, &vp, FitCfg::default()));
        for &p in &pts {
            let q = fit.inverse(fit.forward(p));
            let tol = fit.delta / fit.scale + 1e-9 * (1.0 + p.amax());
            prop_assert!((q - p).amax() <= tol, "{:?} -> {:?} (tol {})", p, q, tol);
        }
    }

    #[test]
    fn fitted_points_stay_inside_viewport(pts in points(2), hor in axis(), ver in axis()) {
        let b = BoundingBox::from_points(&pts).unwrap();
        let vp = Viewport::new(hor, ver).unwrap();
        let fit = Fit::compute(&b, &vp, FitCfg::default());
        let slack = 2.0 * fit.delta + 1e-9;
        for &p in &pts {
            let d = fit.forward(p);
            prop_assert!(d.x >= vp.hor.min - slack && d.x <= vp.hor.max + slack, "{:?}", d);
            prop_assert!(d.y >= vp.ver.min - slack && d.y <= vp.ver.max + slack, "{:?}", d);
        }
    }

    #[test]
    fn horizontal_flip_mirrors_around_center(pts in points(2), hor in axis(), ver in axis()) {
        let b = BoundingBox::from_points(&pts).unwrap();
        let normal = Viewport::new((hor.0.min(hor.1), hor.0.max(hor.1)), ver).unwrap();
        let flipped = Viewport::new((hor.0.max(hor.1), hor.0.min(hor.1)), ver).unwrap();
        let a = Fit::compute(&b, &normal, FitCfg::default());
        let c = Fit::compute(&b, &flipped, FitCfg::default());
        let center = normal.hor.center();
        let tol = a.delta * a.scale + 2.0 * a.delta + 1e-9 * (1.0 + center.abs() + normal.hor.range());
        for &p in &pts {
            let (da, dc) = (a.forward(p), c.forward(p));
            prop_assert!((da.x + dc.x - 2.0 * center).abs() <= tol, "{:?} vs {:?}", da, dc);
            prop_assert_eq!(da.y, dc.y);
        }
    }

    #[test]
    fn pentagon_membership_is_symmetric(pts in points(N), e in edges(), seed in any::<u64>()) {
        let emb = Embedding::from_straight_line(pts[..N].to_vec(), &e).unwrap();
        for g in [emb.clone(), shuffled(&emb, seed)] {
            let set = detect_pentagons(&g).unwrap();
            for v in 1..=g.size() {
                for w in g.neighbors(v) {
                    prop_assert_eq!(set.contains(v, w), set.contains(w, v));
                }
            }
            for (i, j) in set.iter() {
                prop_assert!(g.rotation(i).contains(&j));
            }
        }
    }

    #[test]
    fn each_edge_and_vertex_painted_once(pts in points(N), e in edges(), seed in any::<u64>()) {
        let emb = shuffled(&Embedding::from_straight_line(pts[..N].to_vec(), &e).unwrap(), seed);
        let (n, m) = (emb.size(), emb.edge_count());
        let mut painter = GraphPainter::default();
        painter.set_graph(emb);
        painter.set_paint_area(0.0, 800.0, 600.0, 0.0).unwrap();
        painter.set_highlight_pentagons(true);
        let mut calls: Vec<DrawCall> = Vec::new();
        painter.paint(&mut calls).unwrap();
        let mut seen: Vec<(VertexId, VertexId)> = calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Edge { from_id, to_id, .. } => Some((from_id, to_id)),
                _ => None,
            })
            .collect();
        prop_assert_eq!(seen.len(), m);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), m);
        let vertices = calls.iter().filter(|c| matches!(c, DrawCall::Vertex { .. })).count();
        prop_assert_eq!(vertices, n);
    }
}
