//! Provenance sidecars for scene and triangle artifacts.
//!
//! Each artifact `out/<stem>.<ext>` gets `out/<stem>.provenance.json` recording
//! the code revision, the input scene files, the graph sizes at write time and
//! the command parameters.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use tricanvas::Canvas;

use crate::scene::ensure_parent;

/// Graph sizes when an artifact was written.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphCounts {
    pub points: usize,
    pub edges: usize,
    pub triangles: usize,
}

impl GraphCounts {
    pub fn new(canvas: &Canvas, triangles: usize) -> Self {
        Self {
            points: canvas.points().len(),
            edges: canvas.edges().len(),
            triangles,
        }
    }
}

/// Sidecar contents, filled by the command that produced the artifact.
#[derive(Clone, Debug)]
pub struct Sidecar {
    params: Value,
    inputs: Vec<String>,
    counts: Option<GraphCounts>,
    tag: Option<String>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct SidecarDoc<'a> {
    code_rev: String,
    lib_version: &'static str,
    callsite: Callsite,
    tag: Option<&'a str>,
    inputs: &'a [String],
    counts: Option<GraphCounts>,
    params: &'a Value,
    outputs: [String; 1],
}

impl Sidecar {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            counts: None,
            tag: None,
        }
    }

    pub fn input(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.inputs.push(path.to_string_lossy().into_owned());
        }
        self
    }

    pub fn counts(mut self, counts: GraphCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// Write the sidecar next to `artifact`; the callsite is the caller of this method.
    #[track_caller]
    pub fn write_next_to(&self, artifact: &Path) -> Result<PathBuf> {
        let callsite = Location::caller();
        let path = sidecar_path(artifact);
        ensure_parent(&path)?;
        let doc = SidecarDoc {
            code_rev: code_rev(),
            lib_version: tricanvas::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            tag: self.tag.as_deref(),
            inputs: &self.inputs,
            counts: self.counts,
            params: &self.params,
            outputs: [artifact.to_string_lossy().into_owned()],
        };
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(sidecar = %path.display(), "provenance_written");
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the build: `GIT_COMMIT` at compile time, then at run time, then `git rev-parse`.
pub fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use tricanvas::Point;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/triangles.json")),
            Path::new("/tmp/output/triangles.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("scene")),
            Path::new("scene.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_inputs_counts_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("out/triangles.json");
        let mut canvas = Canvas::default();
        for q in [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)] {
            canvas.add_point(q).unwrap();
        }
        canvas
            .add_edge(&Point::new(0.0, 0.0), &Point::new(10.0, 0.0))
            .unwrap();
        let path = Sidecar::new(json!({"edges_merged": 0}))
            .input(Some(Path::new("scene.json")))
            .input(None)
            .counts(GraphCounts::new(&canvas, 0))
            .tag(Some("demo".into()))
            .write_next_to(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("out/triangles.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"], json!(["scene.json"]));
        assert_eq!(parsed["counts"]["points"], 3);
        assert_eq!(parsed["counts"]["edges"], 1);
        assert_eq!(parsed["counts"]["triangles"], 0);
        assert_eq!(parsed["tag"], "demo");
        assert_eq!(parsed["lib_version"], tricanvas::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
    }

    #[test]
    fn untagged_sidecar_has_null_counts() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("scene.json");
        let path = Sidecar::new(json!({})).write_next_to(&artifact).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert!(parsed["tag"].is_null());
        assert!(parsed["counts"].is_null());
        assert_eq!(parsed["inputs"], json!([]));
    }
}
