use anyhow::{Context, Result};
use rectfill::{Analysis, Rectangle};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Corners and area of the best filled rectangle.
#[derive(Debug, Serialize)]
pub struct RectReport {
    pub min: [i64; 2],
    pub max: [i64; 2],
    /// Areas are serialized as strings; they can exceed JSON's safe integer range.
    pub area: String,
}

impl From<Rectangle> for RectReport {
    fn from(r: Rectangle) -> Self {
        Self {
            min: [r.min.x, r.min.y],
            max: [r.max.x, r.max.y],
            area: r.area.to_string(),
        }
    }
}

/// Results of one `solve` run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    pub vertices: usize,
    pub compression: &'static str,
    pub grid: [usize; 2],
    pub unconstrained_area: String,
    pub filled_area: String,
    pub filled_rectangle: Option<RectReport>,
    pub unconstrained_ms: f64,
    pub filled_ms: f64,
}

impl Report {
    pub fn new(
        input: &Path,
        compression: &'static str,
        analysis: &Analysis,
        timings_ms: (f64, f64),
    ) -> Self {
        Self {
            input: input.display().to_string(),
            vertices: analysis.vertices,
            compression,
            grid: [analysis.grid_width, analysis.grid_height],
            unconstrained_area: analysis.unconstrained_area.to_string(),
            filled_area: analysis.filled_area().to_string(),
            filled_rectangle: analysis.filled.map(RectReport::from),
            unconstrained_ms: timings_ms.0,
            filled_ms: timings_ms.1,
        }
    }
}

/// Write `report` to `out` and a `<stem>.provenance.json` sidecar next to it.
pub fn write_report(out: &Path, report: &Report, params: Value) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = provenance_path(out);
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": rectfill::VERSION,
        "params": params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
