//! Curated internal API (UNSTABLE).
//!
//! The two entry points a canvas front end calls are `compute_triangles` and
//! `squared_distance_point_to_segment`; the rest supports them.

// Kernel
pub use crate::geom2::{
    cross, is_counter_clockwise, normalize_winding, orientation, squared_distance,
    squared_distance_point_to_segment, Edge, EdgeKey, Orientation, Point, PointKey, Rgb, Triangle,
    TriangleKey,
};
// Inference
pub use crate::triangles::{compute_triangles, point_sets, TriangleSet};
// Caller-side store
pub use crate::canvas::{Canvas, CanvasCfg, CanvasError};
// Sampling
pub use crate::rand::{draw_graph, GraphCfg, SampledGraph};
