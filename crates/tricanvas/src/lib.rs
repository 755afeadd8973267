//! Point/edge canvas core: planar kernel and triangle inference.
//!
//! Layout
//! - `geom2`: value types with coordinate identity, squared distances, winding.
//! - `triangles`: recompute the triangle faces implied by a point/edge graph.
//! - `canvas`: caller-side store enforcing the graph preconditions.
//! - `rand`: seeded random graphs for tests, benches and the CLI.
//!
//! API Policy
//! - Project-internal crate; no stable public API. Prefer `api` or `prelude`
//!   re-exports in callers.

pub mod api;
pub mod canvas;
pub mod geom2;
pub mod rand;
pub mod triangles;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canvas::{Canvas, CanvasCfg, CanvasError};
pub use geom2::{Edge, Point, Triangle};
pub use triangles::compute_triangles;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasCfg, CanvasError};
    pub use crate::geom2::{
        normalize_winding, squared_distance, squared_distance_point_to_segment, Edge, Orientation,
        Point, Rgb, Triangle,
    };
    pub use crate::rand::{draw_graph, GraphCfg, SampledGraph};
    pub use crate::triangles::{compute_triangles, TriangleSet};
    pub use nalgebra::Vector2 as Vec2;
}
