//! Triangle inference: every triple of pairwise-connected points is a face.
//!
//! Purpose
//! - Recompute the full triangle set from a `(points, edges)` snapshot. No
//!   incremental state survives between calls; the caller owns the graph.
//!
//! Model
//! - For each edge `(A, B)` and each point `V`, the triple `{A, B, V}` is a
//!   candidate when both `(A, V)` and `(B, V)` are edges.
//! - Candidates are deduplicated by unordered point set and emitted in order of
//!   first acceptance, winding-normalized by `geom2::normalize_winding`.
//! - Edge membership goes through a hash index built once per call, so the
//!   scan is `O(|edges| · |points|)` lookups.
//!
//! Code cross-refs: `geom2::{Edge, EdgeKey, Triangle}`, `canvas::Canvas::triangles`

use std::collections::HashSet;

use crate::geom2::{Edge, EdgeKey, Point, Triangle, TriangleKey};

mod set;

pub use set::TriangleSet;

/// All triangles implied by `edges` over `points`.
///
/// Pre: no self-edges (checked in debug builds) and no duplicate edges.
/// Post: each output triangle has pairwise-connected vertices, no two share a
/// point set, and every one is winding-normalized.
pub fn compute_triangles(points: &[Point], edges: &[Edge]) -> Vec<Triangle> {
    let index: HashSet<EdgeKey> = edges
        .iter()
        .map(|e| {
            debug_assert!(
                !e.is_degenerate(),
                "self-edge at ({}, {}) reached triangle inference",
                e.a.x,
                e.a.y
            );
            e.key()
        })
        .collect();

    let mut found = TriangleSet::default();
    for e in edges {
        for v in points {
            if !index.contains(&EdgeKey::of(&e.a, v)) || !index.contains(&EdgeKey::of(&e.b, v)) {
                continue;
            }
            found.insert(Triangle::normalized(e.a, e.b, *v));
        }
    }
    found.into_vec()
}

/// Point-set keys of `triangles`, for order-insensitive comparisons.
pub fn point_sets(triangles: &[Triangle]) -> HashSet<TriangleKey> {
    triangles.iter().map(Triangle::key).collect()
}
