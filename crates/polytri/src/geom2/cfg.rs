//! Tolerance defaults for 2D predicates.
//!
//! Policy
//! - Defaults are fixed constants; `GeomCfg` exists so a caller working at an
//!   unusual scale can override the sample offset without touching call sites.

/// Offset (in polygon units) of the sample point the convexity test falls back
/// to when a vertex and its neighbors are collinear.
pub const PROBE_DISTANCE: f64 = 1.0;
/// Absolute tolerance for area comparisons.
pub const AREA_EPS: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Maximum distance the convexity sample moves from a collinear vertex
    /// toward the midpoint of its neighbors. Clamped per vertex to half its
    /// shorter edge and half its distance to that midpoint.
    pub probe_distance: f64,
    /// Absolute slack for area comparisons (convexity checks, sanity tests).
    pub area_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            probe_distance: PROBE_DISTANCE,
            area_eps: AREA_EPS,
        }
    }
}
