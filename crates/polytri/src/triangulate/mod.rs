//! Triangulator: ear clipping, convex fan, and monotone sweep over a `Ring`.
//!
//! Purpose
//! - Own a polygon and an ordered output sequence of triangles. Each run clones
//!   the polygon, so the caller's ring is never mutated, and resets the output.
//! - Runs are synchronous and compute every triangle eagerly; consumers then
//!   pull them one at a time with `next_triangle`.
//!
//! Output order
//! - Ear clipping: ear-removal order.
//! - Fan: sweep order around the fixed apex.
//! - Monotone: sweep order by x.
//!
//! Preconditions
//! - All runs need at least 3 vertices (`InvalidPolygon` otherwise).
//! - Ear clipping needs a simple polygon; it fails with `TriangulationStalled`
//!   instead of looping when the ear set runs dry.
//! - Fan needs a convex polygon and monotone an x-monotone one. Neither is
//!   checked; violating input yields wrong triangles, not an error.
//!
//! Code cross-refs: `ring::Ring`, `triangle::Triangle`, `geom2::GeomCfg`

mod ear;
mod fan;
mod monotone;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TriangulationError};
use crate::geom2::{GeomCfg, Point};
use crate::ring::Ring;
use crate::triangle::Triangle;

/// The three triangulation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Any simple polygon.
    EarClipping,
    /// Convex polygons only (unchecked).
    Fan,
    /// x-monotone polygons only (unchecked).
    Monotone,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::EarClipping, Algorithm::Fan, Algorithm::Monotone];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::EarClipping => "ear",
            Algorithm::Fan => "fan",
            Algorithm::Monotone => "monotone",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected ear, fan or monotone)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ear" | "ear-clipping" | "earclipping" => Ok(Algorithm::EarClipping),
            "fan" | "convex" => Ok(Algorithm::Fan),
            "monotone" | "sweep" => Ok(Algorithm::Monotone),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Reusable triangulation driver. Not synchronized; use one per thread.
#[derive(Clone, Debug)]
pub struct Triangulator {
    polygon: Ring,
    triangles: Vec<Triangle>,
    cursor: usize,
    /// Overrides the polygon's own config for every run when set.
    cfg: Option<GeomCfg>,
}

impl Triangulator {
    /// Runs use the config the polygon was built with.
    pub fn new(polygon: Ring) -> Self {
        Self {
            polygon,
            triangles: Vec::new(),
            cursor: 0,
            cfg: None,
        }
    }

    /// Runs use `cfg` regardless of the polygon's own config.
    pub fn with_cfg(polygon: Ring, cfg: GeomCfg) -> Self {
        Self {
            cfg: Some(cfg),
            ..Self::new(polygon)
        }
    }

    /// Assign a new polygon and drop any previous output.
    pub fn set_polygon(&mut self, polygon: Ring) -> &mut Self {
        self.polygon = polygon;
        self.reset();
        self
    }

    pub fn polygon(&self) -> &Ring {
        &self.polygon
    }

    /// The config the next run classifies with.
    pub fn cfg(&self) -> &GeomCfg {
        self.cfg.as_ref().unwrap_or_else(|| self.polygon.cfg())
    }

    /// Triangles of the last successful run, in emission order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Dequeue the next not-yet-consumed triangle (one per animation step).
    pub fn next_triangle(&mut self) -> Option<Triangle> {
        let t = self.triangles.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(t)
    }

    /// Number of triangles not yet handed out by `next_triangle`.
    pub fn pending(&self) -> usize {
        self.triangles.len() - self.cursor
    }

    pub fn triangulate(&mut self, algorithm: Algorithm) -> Result<&[Triangle]> {
        self.reset();
        let working = self.working_ring()?;
        let n = working.len();
        tracing::debug!(%algorithm, vertices = n, "triangulate");
        let outcome = match algorithm {
            Algorithm::EarClipping => ear::clip(working, &mut self.triangles),
            Algorithm::Fan => {
                fan::sweep(&working, &mut self.triangles);
                Ok(())
            }
            Algorithm::Monotone => {
                monotone::sweep(&working, &mut self.triangles);
                Ok(())
            }
        };
        if let Err(e) = outcome {
            tracing::debug!(%algorithm, error = %e, "triangulate_failed");
            self.triangles.clear();
            return Err(e);
        }
        debug_assert_eq!(self.triangles.len(), n - 2);
        tracing::debug!(%algorithm, triangles = self.triangles.len(), "triangulated");
        Ok(&self.triangles)
    }

    pub fn ear_clipping(&mut self) -> Result<&[Triangle]> {
        self.triangulate(Algorithm::EarClipping)
    }

    pub fn fan(&mut self) -> Result<&[Triangle]> {
        self.triangulate(Algorithm::Fan)
    }

    pub fn monotone(&mut self) -> Result<&[Triangle]> {
        self.triangulate(Algorithm::Monotone)
    }

    fn reset(&mut self) {
        self.triangles.clear();
        self.cursor = 0;
    }

    fn working_ring(&self) -> Result<Ring> {
        if self.polygon.len() < 3 {
            return Err(TriangulationError::InvalidPolygon {
                vertices: self.polygon.len(),
            });
        }
        let mut working = self.polygon.clone();
        if let Some(cfg) = self.cfg {
            working.set_cfg(cfg);
        }
        Ok(working)
    }
}

/// One-shot helper: triangulate `points` (boundary order) with `algorithm`.
pub fn triangulate(points: &[Point], algorithm: Algorithm) -> Result<Vec<Triangle>> {
    let mut t = Triangulator::new(Ring::new(points.iter().copied()));
    t.triangulate(algorithm)?;
    Ok(t.into_triangles())
}
