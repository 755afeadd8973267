//! Caller-side point/edge store with the preconditions triangle inference needs.
//!
//! Purpose
//! - Own the graph the engine reads: reject coincident points, self-edges,
//!   duplicate edges and dangling endpoints at insertion time.
//! - Cascade point removal to every incident edge.
//! - Hit-testing within a snap radius for point and edge selection.
//!
//! Triangles are never cached; `Canvas::triangles` recomputes from the
//! current snapshot on every call.

use std::fmt;

use crate::geom2::{squared_distance, squared_distance_point_to_segment, Edge, Point, Triangle};
use crate::triangles::compute_triangles;

/// Canvas configuration.
#[derive(Clone, Copy, Debug)]
pub struct CanvasCfg {
    /// Selection tolerance in pixels (strict: hits must be closer than this).
    pub snap_radius: f64,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self { snap_radius: 20.0 }
    }
}

impl CanvasCfg {
    /// The snap radius must be finite and non-negative.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let r = self.snap_radius;
        if r.is_finite() && r >= 0.0 {
            Ok(())
        } else {
            Err(CanvasError::InvalidSnapRadius { radius: r })
        }
    }

    /// Squared snap radius shared by point and edge hit tests; an invalid radius hits nothing.
    #[inline]
    fn snap2(&self) -> f64 {
        match self.validate() {
            Ok(()) => self.snap_radius * self.snap_radius,
            Err(_) => 0.0,
        }
    }
}

/// Rejected graph mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasError {
    CoincidentPoint { x: f64, y: f64 },
    SelfEdge { x: f64, y: f64 },
    DuplicateEdge { coords: [f64; 4] },
    UnknownEndpoint { x: f64, y: f64 },
    InvalidSnapRadius { radius: f64 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentPoint { x, y } => write!(f, "point already exists at ({x}, {y})"),
            Self::SelfEdge { x, y } => write!(f, "edge would connect ({x}, {y}) to itself"),
            Self::DuplicateEdge { coords: [x1, y1, x2, y2] } => {
                write!(f, "edge ({x1}, {y1})-({x2}, {y2}) already exists")
            }
            Self::UnknownEndpoint { x, y } => write!(f, "no point at edge endpoint ({x}, {y})"),
            Self::InvalidSnapRadius { radius } => {
                write!(f, "snap radius must be finite and >= 0, got {radius}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// Points and undirected edges, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    cfg: CanvasCfg,
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl Canvas {
    pub fn new(cfg: CanvasCfg) -> Self {
        Self {
            cfg,
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &CanvasCfg {
        &self.cfg
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Stored point at the same coordinates as `p` (keeps its color).
    pub fn find_point(&self, p: &Point) -> Option<&Point> {
        self.points.iter().find(|q| *q == p)
    }

    pub fn add_point(&mut self, p: Point) -> Result<(), CanvasError> {
        if self.find_point(&p).is_some() {
            return Err(CanvasError::CoincidentPoint { x: p.x, y: p.y });
        }
        self.points.push(p);
        tracing::debug!(x = p.x, y = p.y, points = self.points.len(), "point created");
        Ok(())
    }

    /// Removes `p` and every edge incident to it. Returns false if `p` is absent.
    pub fn remove_point(&mut self, p: &Point) -> bool {
        let Some(idx) = self.points.iter().position(|q| q == p) else {
            return false;
        };
        self.points.remove(idx);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(p));
        tracing::debug!(
            x = p.x,
            y = p.y,
            edges_removed = before - self.edges.len(),
            "point deleted"
        );
        true
    }

    /// Connects two existing points. Endpoints are taken from the stored points.
    pub fn add_edge(&mut self, a: &Point, b: &Point) -> Result<(), CanvasError> {
        if a == b {
            return Err(CanvasError::SelfEdge { x: a.x, y: a.y });
        }
        let a = *self
            .find_point(a)
            .ok_or(CanvasError::UnknownEndpoint { x: a.x, y: a.y })?;
        let b = *self
            .find_point(b)
            .ok_or(CanvasError::UnknownEndpoint { x: b.x, y: b.y })?;
        let edge = Edge::new(a, b);
        if self.edges.contains(&edge) {
            return Err(CanvasError::DuplicateEdge {
                coords: edge.coords(),
            });
        }
        self.edges.push(edge);
        tracing::debug!(coords = ?edge.coords(), edges = self.edges.len(), "edge created");
        Ok(())
    }

    /// Removes `e` in either endpoint order. Returns false if absent.
    pub fn remove_edge(&mut self, e: &Edge) -> bool {
        let Some(idx) = self.edges.iter().position(|f| f == e) else {
            return false;
        };
        let removed = self.edges.remove(idx);
        tracing::debug!(coords = ?removed.coords(), "edge deleted");
        true
    }

    /// Nearest point to `(x, y)` and its Euclidean distance. Ties keep the earlier point.
    pub fn closest_point(&self, x: f64, y: f64) -> Option<(Point, f64)> {
        self.closest_point_sq(x, y).map(|(p, d2)| (p, d2.sqrt()))
    }

    fn closest_point_sq(&self, x: f64, y: f64) -> Option<(Point, f64)> {
        let cursor = Point::new(x, y);
        let mut best: Option<(Point, f64)> = None;
        for p in &self.points {
            let d2 = squared_distance(p, &cursor);
            if best.map_or(true, |(_, b)| d2 < b) {
                best = Some((*p, d2));
            }
        }
        best
    }

    /// Nearest point strictly within the snap radius.
    pub fn point_near(&self, x: f64, y: f64) -> Option<Point> {
        let snap2 = self.cfg.snap2();
        self.closest_point_sq(x, y)
            .filter(|&(_, d2)| d2 < snap2)
            .map(|(p, _)| p)
    }

    /// Nearest edge whose segment lies strictly within the snap radius, with its
    /// squared distance.
    pub fn edge_near(&self, x: f64, y: f64) -> Option<(Edge, f64)> {
        let cursor = Point::new(x, y);
        let snap2 = self.cfg.snap2();
        let mut best: Option<(Edge, f64)> = None;
        for e in &self.edges {
            let d2 = squared_distance_point_to_segment(&cursor, &e.a, &e.b);
            if d2 < snap2 && best.map_or(true, |(_, b)| d2 < b) {
                best = Some((*e, d2));
            }
        }
        best
    }

    pub fn remove_point_near(&mut self, x: f64, y: f64) -> Option<Point> {
        let p = self.point_near(x, y)?;
        self.remove_point(&p);
        Some(p)
    }

    pub fn remove_edge_near(&mut self, x: f64, y: f64) -> Option<Edge> {
        let (e, _) = self.edge_near(x, y)?;
        self.remove_edge(&e);
        Some(e)
    }

    /// Fresh triangle set for the current graph.
    pub fn triangles(&self) -> Vec<Triangle> {
        compute_triangles(&self.points, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Rgb;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn triangle_canvas() -> Canvas {
        let mut c = Canvas::default();
        for q in [p(0.0, 0.0), p(100.0, 0.0), p(50.0, 100.0)] {
            c.add_point(q).unwrap();
        }
        c.add_edge(&p(0.0, 0.0), &p(100.0, 0.0)).unwrap();
        c.add_edge(&p(100.0, 0.0), &p(50.0, 100.0)).unwrap();
        c.add_edge(&p(50.0, 100.0), &p(0.0, 0.0)).unwrap();
        c
    }

    #[test]
    fn rejects_malformed_mutations() {
        let mut c = triangle_canvas();
        assert_eq!(
            c.add_point(p(0.0, 0.0)),
            Err(CanvasError::CoincidentPoint { x: 0.0, y: 0.0 })
        );
        assert_eq!(
            c.add_edge(&p(0.0, 0.0), &p(0.0, 0.0)),
            Err(CanvasError::SelfEdge { x: 0.0, y: 0.0 })
        );
        assert!(matches!(
            c.add_edge(&p(100.0, 0.0), &p(0.0, 0.0)),
            Err(CanvasError::DuplicateEdge { .. })
        ));
        assert_eq!(
            c.add_edge(&p(0.0, 0.0), &p(7.0, 7.0)),
            Err(CanvasError::UnknownEndpoint { x: 7.0, y: 7.0 })
        );
        assert_eq!(c.points().len(), 3);
        assert_eq!(c.edges().len(), 3);
        assert!(c.edges().iter().all(|e| !e.is_degenerate()));
    }

    #[test]
    fn triangles_follow_mutations() {
        let mut c = triangle_canvas();
        assert_eq!(c.triangles().len(), 1);
        assert!(c.remove_edge(&Edge::new(p(0.0, 0.0), p(50.0, 100.0))));
        assert!(c.triangles().is_empty());
        c.add_edge(&p(0.0, 0.0), &p(50.0, 100.0)).unwrap();
        assert_eq!(c.triangles().len(), 1);
    }

    #[test]
    fn removing_point_drops_all_incident_edges() {
        let mut c = triangle_canvas();
        c.add_point(p(200.0, 0.0)).unwrap();
        c.add_edge(&p(100.0, 0.0), &p(200.0, 0.0)).unwrap();
        // (100, 0) now has three incident edges.
        assert!(c.remove_point(&p(100.0, 0.0)));
        assert_eq!(c.points().len(), 3);
        assert_eq!(c.edges().len(), 1);
        assert!(c.edges().iter().all(|e| !e.touches(&p(100.0, 0.0))));
        assert!(c.triangles().is_empty());
        assert!(!c.remove_point(&p(100.0, 0.0)));
    }

    #[test]
    fn edges_use_stored_points() {
        let mut c = Canvas::default();
        c.add_point(p(1.0, 1.0).with_color(Rgb(255, 255, 0))).unwrap();
        c.add_point(p(9.0, 1.0)).unwrap();
        c.add_edge(&p(1.0, 1.0), &p(9.0, 1.0)).unwrap();
        assert_eq!(c.edges()[0].a.color, Some(Rgb(255, 255, 0)));
    }

    #[test]
    fn hit_testing_respects_snap_radius() {
        let c = triangle_canvas();
        let (q, d) = c.closest_point(3.0, 4.0).unwrap();
        assert_eq!(q, p(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(c.point_near(3.0, 4.0), Some(p(0.0, 0.0)));
        assert_eq!(c.point_near(0.0, 20.0), None);

        let (e, d2) = c.edge_near(50.0, 10.0).unwrap();
        assert_eq!(e, Edge::new(p(0.0, 0.0), p(100.0, 0.0)));
        assert!((d2 - 100.0).abs() < 1e-12);
        assert!(c.edge_near(50.0, 40.0).is_none());
        assert!(Canvas::default().closest_point(0.0, 0.0).is_none());
    }

    #[test]
    fn remove_near_uses_hit_testing() {
        let mut c = triangle_canvas();
        assert_eq!(c.remove_edge_near(50.0, -3.0), Some(Edge::new(p(0.0, 0.0), p(100.0, 0.0))));
        assert_eq!(c.edges().len(), 2);
        assert_eq!(c.remove_point_near(48.0, 97.0), Some(p(50.0, 100.0)));
        assert!(c.edges().is_empty());
        assert_eq!(c.remove_point_near(500.0, 500.0), None);
    }

    #[test]
    fn snap_radius_is_configurable() {
        let mut c = Canvas::new(CanvasCfg { snap_radius: 2.0 });
        c.add_point(p(0.0, 0.0)).unwrap();
        assert_eq!(c.cfg().snap_radius, 2.0);
        assert!(c.point_near(1.0, 1.0).is_some());
        assert!(c.point_near(2.0, 0.0).is_none());
    }

    #[test]
    fn invalid_snap_radius_hits_nothing() {
        for r in [-5.0, f64::NAN, f64::INFINITY] {
            let cfg = CanvasCfg { snap_radius: r };
            assert!(matches!(
                cfg.validate(),
                Err(CanvasError::InvalidSnapRadius { .. })
            ));
            let mut c = Canvas::new(cfg);
            c.add_point(p(0.0, 0.0)).unwrap();
            c.add_point(p(100.0, 0.0)).unwrap();
            c.add_edge(&p(0.0, 0.0), &p(100.0, 0.0)).unwrap();
            assert_eq!(c.point_near(1.0, 1.0), None);
            assert_eq!(c.edge_near(1.0, 1.0), None);
            assert_eq!(c.remove_edge_near(1.0, 1.0), None);
            assert_eq!(c.edges().len(), 1);
        }
        assert!(CanvasCfg::default().validate().is_ok());
        assert!(CanvasCfg { snap_radius: 0.0 }.validate().is_ok());
    }

    #[test]
    fn point_and_edge_hits_share_the_radius() {
        let mut c = Canvas::new(CanvasCfg { snap_radius: 5.0 });
        c.add_point(p(0.0, 0.0)).unwrap();
        c.add_point(p(100.0, 0.0)).unwrap();
        c.add_edge(&p(0.0, 0.0), &p(100.0, 0.0)).unwrap();
        // Distance 5 from both the point and the edge: strict, so no hit either way.
        assert_eq!(c.point_near(0.0, 5.0), None);
        assert_eq!(c.edge_near(50.0, 5.0), None);
        assert_eq!(c.point_near(3.0, 3.0), Some(p(0.0, 0.0)));
        assert!(c.edge_near(50.0, 4.0).is_some());
    }

    #[test]
    fn errors_render() {
        let e = CanvasError::DuplicateEdge {
            coords: [0.0, 0.0, 1.0, 2.0],
        };
        assert_eq!(e.to_string(), "edge (0, 0)-(1, 2) already exists");
    }
}
