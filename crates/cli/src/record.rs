//! Run records: `<stem>.run.json` written next to every output file.
//!
//! A record names the engine build and what produced the output. Triangulation
//! runs also carry the polygon area and the summed triangle area, so a reader can
//! check coverage without re-running.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The command behind an output file and its numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Run {
    Triangulate {
        algorithm: String,
        input: String,
        vertices: usize,
        triangles: usize,
        polygon_area: f64,
        triangle_area: f64,
    },
    Sample {
        kind: String,
        vertices: usize,
        seed: u64,
        index: u64,
        area: f64,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub engine_version: String,
    pub code_rev: String,
    pub output: String,
    #[serde(flatten)]
    pub run: Run,
}

impl RunRecord {
    pub fn new(output: &Path, run: Run) -> Self {
        Self {
            engine_version: polytri::VERSION.to_string(),
            code_rev: code_rev(),
            output: output.to_string_lossy().into_owned(),
            run,
        }
    }

    /// |triangle area - polygon area| relative to the polygon area.
    ///
    /// `None` for records that are not triangulation runs or whose polygon has no area.
    pub fn area_error(&self) -> Option<f64> {
        match self.run {
            Run::Triangulate {
                polygon_area,
                triangle_area,
                ..
            } if polygon_area > 0.0 => Some((triangle_area - polygon_area).abs() / polygon_area),
            _ => None,
        }
    }
}

/// Commit the binary was built from: `GIT_COMMIT` at build time, then at run time.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// `dir/tris.json` → `dir/tris.run.json`.
pub fn record_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}.run.json"))
}

pub fn write_record(output: &Path, run: Run) -> Result<PathBuf> {
    let path = record_path(output);
    let record = RunRecord::new(output, run);
    let bytes = serde_json::to_vec_pretty(&record)?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn read_record(path: &Path) -> Result<RunRecord> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing run record {}", path.display()))
}
