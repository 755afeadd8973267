//! Seeded random point/edge graphs.
//!
//! Purpose
//! - Reproducible inputs for property tests, benches and the CLI `sample`
//!   command. The same `(cfg, seed)` always yields the same graph.
//!
//! Model
//! - Points: distinct integer-pixel locations drawn uniformly from
//!   `[0, extent)²` (rejection on coincidence).
//! - Edges: each unordered pair is connected independently with
//!   probability `edge_probability`. No self-edges, no duplicates.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Edge, Point};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GraphCfg {
    /// Requested point count; capped by the number of distinct pixels.
    pub points: usize,
    /// Per-pair edge probability. Clamped to [0, 1]; NaN counts as 0.
    pub edge_probability: f64,
    /// Side length of the square canvas in pixels.
    pub extent: f64,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            points: 12,
            edge_probability: 0.35,
            extent: 512.0,
        }
    }
}

/// A drawn graph plus the seed that replays it.
#[derive(Clone, Debug)]
pub struct SampledGraph {
    pub points: Vec<Point>,
    pub edges: Vec<Edge>,
    pub seed: u64,
}

pub fn draw_graph(cfg: GraphCfg, seed: u64) -> SampledGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = if cfg.extent.is_finite() {
        cfg.extent.floor().max(1.0) as u64
    } else {
        1
    };
    let pixels = (u128::from(side) * u128::from(side)).min(usize::MAX as u128) as usize;
    let target = cfg.points.min(pixels);

    let mut seen = HashSet::with_capacity(target);
    let mut points = Vec::with_capacity(target);
    while points.len() < target {
        let p = Point::new(rng.gen_range(0..side) as f64, rng.gen_range(0..side) as f64);
        if seen.insert(p) {
            points.push(p);
        }
    }

    let prob = if cfg.edge_probability.is_nan() {
        0.0
    } else {
        cfg.edge_probability.clamp(0.0, 1.0)
    };
    let mut edges = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if rng.gen_bool(prob) {
                edges.push(Edge::new(points[i], points[j]));
            }
        }
    }
    SampledGraph {
        points,
        edges,
        seed,
    }
}
