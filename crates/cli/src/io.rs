//! Polygon input and triangle output files.
//!
//! - JSON polygons are `[[x, y], ...]` in boundary order.
//! - CSV polygons need numeric `x` and `y` columns; rows are boundary order.
//! - Triangles are written as `[{"from": [x, y], "ear": [x, y], "to": [x, y]}, ...]`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polytri::geom2::Point;
use polytri::triangle::Triangle;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleRecord {
    pub from: [f64; 2],
    pub ear: [f64; 2],
    pub to: [f64; 2],
}

impl From<&Triangle> for TriangleRecord {
    fn from(t: &Triangle) -> Self {
        Self {
            from: [t.from.x, t.from.y],
            ear: [t.ear.x, t.ear.y],
            to: [t.to.x, t.to.y],
        }
    }
}

/// Load polygon vertices from a `.json` or `.csv` file.
pub fn load_polygon(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("unsupported polygon file {} (want .json or .csv)", path.display()),
    }
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("missing coordinate in row {row} of {}", path.display()),
        })
        .collect()
}

/// Serialize `value` as pretty JSON at `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
