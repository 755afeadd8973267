//! Value types of the authoring graph: points, edges, triangles.
//!
//! - `Point`: canvas location with an optional display color. Identity is the
//!   coordinate pair only.
//! - `Edge`: unordered endpoint pair; `(a, b)` and `(b, a)` are the same edge.
//! - `Triangle`: three points; identity is the unordered point set.
//!
//! Code cross-refs: `kernel::normalize_winding`, `triangles::compute_triangles`

use nalgebra::Vector2;
use std::hash::{Hash, Hasher};

/// Display color tag (sRGB). Never part of point identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Coordinate identity of a point: bit patterns of `(x, y)`, `-0.0` folded into `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(u64, u64);

impl PointKey {
    #[inline]
    fn of(x: f64, y: f64) -> Self {
        Self(fold_zero(x).to_bits(), fold_zero(y).to_bits())
    }
}

#[inline]
fn fold_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// 2D location in canvas space (device pixels, y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: Option<Rgb>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, color: None }
    }
    #[inline]
    pub fn with_color(self, color: Rgb) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }
    #[inline]
    pub fn vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn key(&self) -> PointKey {
        PointKey::of(self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Unordered identity of an edge (endpoint keys in sorted order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey(PointKey, PointKey);

impl EdgeKey {
    #[inline]
    pub fn of(a: &Point, b: &Point) -> Self {
        let (ka, kb) = (a.key(), b.key());
        if ka <= kb {
            Self(ka, kb)
        } else {
            Self(kb, ka)
        }
    }
}

/// Undirected edge between two points.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Build from the endpoint quadruple `(x1, y1, x2, y2)`.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.a.x, self.a.y, self.b.x, self.b.y]
    }
    /// True for a self-edge (both endpoints are the same point).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    #[inline]
    pub fn touches(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }
    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::of(&self.a, &self.b)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Unordered identity of a triangle (vertex keys sorted).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriangleKey([PointKey; 3]);

/// Ordered vertex triple. Equality ignores vertex order.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Keeps the given order; see `Triangle::normalized` for winding-normalized construction.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
    pub fn key(&self) -> TriangleKey {
        let mut keys = self.vertices.map(|p| p.key());
        keys.sort_unstable();
        TriangleKey(keys)
    }
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.vertices.contains(p)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
