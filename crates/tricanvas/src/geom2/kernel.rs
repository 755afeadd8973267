//! Stateless planar predicates: squared distances and the winding test.
//!
//! Sign convention
//! - `cross(a, b, c)` is the z-component of `(b - a) × (c - a)` taken on raw
//!   canvas coordinates (y down).
//! - A triple is correctly wound for the renderer when `cross < 0`; that is
//!   counter-clockwise as seen on the y-down canvas and matches the
//!   right-handed render space after the y flip.

use super::types::{Point, Triangle};

/// Winding of an ordered triple as seen on the y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// `|p - q|²`.
#[inline]
pub fn squared_distance(p: &Point, q: &Point) -> f64 {
    (p.vec() - q.vec()).norm_squared()
}

/// Squared distance from `p` to the closest point of segment `u–w`.
///
/// Post: result is `>= 0` and equals `0` iff `p` lies on the segment.
/// A zero-length segment degrades to `squared_distance(p, u)`.
pub fn squared_distance_point_to_segment(p: &Point, u: &Point, w: &Point) -> f64 {
    let len2 = squared_distance(u, w);
    if len2 == 0.0 {
        return squared_distance(p, u);
    }
    let (pv, uv, wv) = (p.vec(), u.vec(), w.vec());
    let t = (uv - pv).dot(&(uv - wv)) / len2;
    if t < 0.0 {
        squared_distance(p, u)
    } else if t > 1.0 {
        squared_distance(p, w)
    } else {
        let proj = uv + (wv - uv) * t;
        (pv - proj).norm_squared()
    }
}

/// z-component of `(b - a) × (c - a)`.
#[inline]
pub fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = b.vec() - a.vec();
    let ac = c.vec() - a.vec();
    ab.x * ac.y - ab.y * ac.x
}

pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    let z = cross(a, b, c);
    if z < 0.0 {
        Orientation::CounterClockwise
    } else if z > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True when `(a, b, c)` needs no reordering. Collinear triples count as wound,
/// which keeps `normalize_winding` idempotent on degenerate input.
#[inline]
pub fn is_counter_clockwise(a: &Point, b: &Point, c: &Point) -> bool {
    orientation(a, b, c) != Orientation::Clockwise
}

/// Returns `(a, b, c)` if already wound, else `(a, c, b)`. `a` never moves.
#[inline]
pub fn normalize_winding(a: Point, b: Point, c: Point) -> [Point; 3] {
    if is_counter_clockwise(&a, &b, &c) {
        [a, b, c]
    } else {
        [a, c, b]
    }
}

impl Triangle {
    /// Triangle with winding normalized by `normalize_winding`.
    #[inline]
    pub fn normalized(a: Point, b: Point, c: Point) -> Self {
        let [a, b, c] = normalize_winding(a, b, c);
        Self::new(a, b, c)
    }
    #[inline]
    pub fn orientation(&self) -> Orientation {
        let [a, b, c] = &self.vertices;
        orientation(a, b, c)
    }
}
