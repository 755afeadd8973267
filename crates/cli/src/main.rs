use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tricanvas::rand::{draw_graph, GraphCfg};
use tricanvas::{Canvas, CanvasCfg};

mod provenance;
mod scene;

use provenance::{GraphCounts, Sidecar};
use scene::{ensure_parent, merge_edges, read_edges_csv, Scene, TrianglesOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point/edge canvas tools: triangle inference, hit-testing, sampling")]
struct Cmd {
    /// Optional label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Infer triangles from a scene and/or an x1,y1,x2,y2 edge list CSV
    Triangles {
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long)]
        edges_csv: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Report the point and edge nearest to (x, y) within the snap radius
    Hit {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, default_value_t = CanvasCfg::default().snap_radius)]
        snap: f64,
    },
    /// Write a seeded random scene
    Sample {
        #[arg(long, default_value_t = GraphCfg::default().points)]
        points: usize,
        #[arg(long, default_value_t = GraphCfg::default().edge_probability)]
        p: f64,
        #[arg(long, default_value_t = GraphCfg::default().extent)]
        extent: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangles {
            scene,
            edges_csv,
            out,
        } => triangles(scene.as_deref(), edges_csv.as_deref(), &out, cmd.tag),
        Action::Hit { scene, x, y, snap } => hit(&scene, x, y, snap),
        Action::Sample {
            points,
            p,
            extent,
            seed,
            out,
        } => sample(
            GraphCfg {
                points,
                edge_probability: p,
                extent,
            },
            seed,
            &out,
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn triangles(
    scene: Option<&Path>,
    edges_csv: Option<&Path>,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(scene = ?scene, edges_csv = ?edges_csv, out = %out.display(), tag = ?tag, "triangles");
    let mut canvas = match scene {
        Some(path) => Scene::load(path)?.into_canvas(CanvasCfg::default())?,
        None => Canvas::default(),
    };
    let mut merged = 0;
    if let Some(path) = edges_csv {
        let edges = read_edges_csv(path)?;
        merged = merge_edges(&mut canvas, &edges)?;
        tracing::info!(added = merged, "edges_merged");
    }

    let tris = canvas.triangles();
    tracing::info!(
        points = canvas.points().len(),
        edges = canvas.edges().len(),
        triangles = tris.len(),
        "triangles_computed"
    );
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&TrianglesOut::new(&tris))?)?;

    Sidecar::new(json!({ "edges_merged": merged }))
        .input(scene)
        .input(edges_csv)
        .counts(GraphCounts::new(&canvas, tris.len()))
        .tag(tag)
        .write_next_to(out)?;
    Ok(())
}

fn hit(scene: &Path, x: f64, y: f64, snap: f64) -> Result<()> {
    let canvas = Scene::load(scene)?.into_canvas(CanvasCfg { snap_radius: snap })?;
    let point = canvas.point_near(x, y);
    let edge = canvas.edge_near(x, y);
    tracing::info!(x, y, snap, point_hit = point.is_some(), edge_hit = edge.is_some(), "hit");
    let obj = json!({
        "cursor": [x, y],
        "snap_radius": snap,
        "point": point.map(|p| [p.x, p.y]),
        "edge": edge.map(|(e, d2)| json!({ "coords": e.coords(), "distance": d2.sqrt() })),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn sample(cfg: GraphCfg, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    let g = draw_graph(cfg, seed);
    tracing::info!(points = g.points.len(), edges = g.edges.len(), seed, "sample");
    let mut canvas = Canvas::default();
    for p in &g.points {
        canvas.add_point(*p)?;
    }
    for e in &g.edges {
        canvas.add_edge(&e.a, &e.b)?;
    }
    Scene::from_canvas(&canvas).save(out)?;
    let params = json!({
        "points": cfg.points,
        "edge_probability": cfg.edge_probability,
        "extent": cfg.extent,
        "seed": seed
    });
    Sidecar::new(params)
        .counts(GraphCounts::new(&canvas, canvas.triangles().len()))
        .tag(tag)
        .write_next_to(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "lib_version": tricanvas::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
