//! Build a small fan on a canvas and print the inferred triangles.
//!
//! Usage:
//!   cargo run -p tricanvas --example fan -- 6
//!
//! Places a hub and `n` rim points (default 6), connects hub-to-rim and
//! consecutive rim points, and prints each triangle in winding order. Rim
//! points that round to an already used pixel are dropped.

use std::collections::HashSet;
use tricanvas::prelude::*;

const HUB: (f64, f64) = (256.0, 256.0);
const RADIUS: f64 = 200.0;

fn rim_points(n: usize) -> Vec<Point> {
    let mut seen = HashSet::new();
    (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            Point::new(
                (HUB.0 + RADIUS * th.cos()).round(),
                (HUB.1 + RADIUS * th.sin()).round(),
            )
        })
        .filter(|p| seen.insert(*p))
        .collect()
}

fn fan_canvas(n: usize) -> Result<Canvas, CanvasError> {
    let hub = Point::from(HUB);
    let rim = rim_points(n.max(3));
    let mut canvas = Canvas::default();
    canvas.add_point(hub)?;
    for p in &rim {
        canvas.add_point(*p)?;
        canvas.add_edge(&hub, p)?;
    }
    for k in 0..rim.len() {
        canvas.add_edge(&rim[k], &rim[(k + 1) % rim.len()])?;
    }
    Ok(canvas)
}

fn main() -> Result<(), CanvasError> {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(6);
    let canvas = fan_canvas(n)?;
    println!("rim points: {}", canvas.points().len() - 1);
    for (i, t) in canvas.triangles().iter().enumerate() {
        let [a, b, c] = t.vertices;
        println!(
            "triangle {i}: ({}, {}) ({}, {}) ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        );
    }
    Ok(())
}
