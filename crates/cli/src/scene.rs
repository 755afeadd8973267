//! Scene files: JSON point/edge graphs and CSV edge lists.
//!
//! JSON layout: `{ "points": [{"x":..,"y":..,"color":[r,g,b]}], "edges": [[x1,y1,x2,y2]] }`.
//! Loading always goes through `Canvas`, so malformed graphs are rejected.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tricanvas::geom2::Rgb;
use tricanvas::{Canvas, CanvasCfg, CanvasError, Edge, Point, Triangle};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}

impl From<&Point> for PointRow {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            color: p.color.map(|Rgb(r, g, b)| [r, g, b]),
        }
    }
}

impl From<&PointRow> for Point {
    fn from(row: &PointRow) -> Self {
        let p = Point::new(row.x, row.y);
        match row.color {
            Some([r, g, b]) => p.with_color(Rgb(r, g, b)),
            None => p,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub points: Vec<PointRow>,
    #[serde(default)]
    pub edges: Vec<[f64; 4]>,
}

impl Scene {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            points: canvas.points().iter().map(PointRow::from).collect(),
            edges: canvas.edges().iter().map(Edge::coords).collect(),
        }
    }

    pub fn into_canvas(self, cfg: CanvasCfg) -> Result<Canvas> {
        cfg.validate().context("canvas config")?;
        let mut canvas = Canvas::new(cfg);
        for (i, row) in self.points.iter().enumerate() {
            canvas
                .add_point(Point::from(row))
                .with_context(|| format!("scene point {i}"))?;
        }
        for (i, [x1, y1, x2, y2]) in self.edges.iter().copied().enumerate() {
            canvas
                .add_edge(&Point::new(x1, y1), &Point::new(x2, y2))
                .with_context(|| format!("scene edge {i}"))?;
        }
        Ok(canvas)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}

/// Read an edge list with columns `x1,y1,x2,y2` (any numeric dtype).
pub fn read_edges_csv(path: &Path) -> Result<Vec<Edge>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let x1 = f64_column(&df, "x1")?;
    let y1 = f64_column(&df, "y1")?;
    let x2 = f64_column(&df, "x2")?;
    let y2 = f64_column(&df, "y2")?;
    tracing::info!(rows = df.height(), "edges_csv");
    Ok((0..df.height())
        .map(|i| Edge::from_coords(x1[i], y1[i], x2[i], y2[i]))
        .collect())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name} in row {row}")))
        .collect()
}

/// Add CSV edges to `canvas`, creating missing endpoints. Duplicate edges are
/// skipped with a warning; a self-edge is an error and leaves the canvas as it
/// was after the previous row.
pub fn merge_edges(canvas: &mut Canvas, edges: &[Edge]) -> Result<usize> {
    let mut added = 0;
    for (row, e) in edges.iter().enumerate() {
        if e.is_degenerate() {
            return Err(CanvasError::SelfEdge { x: e.a.x, y: e.a.y })
                .with_context(|| format!("edge list row {row}"));
        }
        if canvas.edges().contains(e) {
            tracing::warn!(row, coords = ?e.coords(), "duplicate edge skipped");
            continue;
        }
        for p in [e.a, e.b] {
            if canvas.find_point(&p).is_none() {
                canvas.add_point(p)?;
            }
        }
        canvas
            .add_edge(&e.a, &e.b)
            .with_context(|| format!("edge list row {row}"))?;
        added += 1;
    }
    Ok(added)
}

/// JSON shape of the triangle output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrianglesOut {
    pub count: usize,
    pub triangles: Vec<[[f64; 2]; 3]>,
}

impl TrianglesOut {
    pub fn new(tris: &[Triangle]) -> Self {
        Self {
            count: tris.len(),
            triangles: tris
                .iter()
                .map(|t| t.vertices.map(|p| [p.x, p.y]))
                .collect(),
        }
    }
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
