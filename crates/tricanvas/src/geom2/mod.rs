//! Planar geometry kernel for the point/edge canvas.
//!
//! Purpose
//! - Value types with coordinate identity (`Point`, `Edge`, `Triangle`).
//! - Squared point/segment distances for hit-testing.
//! - The winding test and normalization consumed by `triangles`.
//!
//! Conventions
//! - Canvas space: device pixels, origin top-left, y grows downward.
//! - Distances stay squared wherever only comparisons matter.
//!
//! Code cross-refs: `triangles::compute_triangles`, `canvas::Canvas`

mod kernel;
mod types;

pub use kernel::{
    cross, is_counter_clockwise, normalize_winding, orientation, squared_distance,
    squared_distance_point_to_segment, Orientation,
};
pub use types::{Edge, EdgeKey, Point, PointKey, Rgb, Triangle, TriangleKey};
