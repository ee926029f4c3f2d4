//! Polygon triangulation engine.
//!
//! A simple closed polygon is held as a cyclic [`Ring`](ring::Ring) of vertices with
//! live reflex/convex/ear classification. A [`Triangulator`](triangulate::Triangulator)
//! decomposes it with one of three algorithms:
//! - ear clipping (any simple polygon),
//! - fan triangulation (convex polygons),
//! - monotone sweep (x-monotone polygons).
//!
//! Output is an ordered sequence of [`Triangle`](triangle::Triangle)s labeled
//! `from`/`ear`/`to`, meant to be consumed one at a time (e.g. animated peeling).
//!
//! API Policy
//! - The engine never mutates a caller's ring; every run works on a clone.
//! - Preconditions of fan and monotone runs are not checked (see `Algorithm`).

pub mod error;
pub mod geom2;
pub mod ring;
pub mod triangle;
pub mod triangulate;

pub use error::{Result, TriangulationError};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Result, TriangulationError};
    pub use crate::geom2::rand::{
        draw_comb, draw_convex, draw_monotone, draw_star, CombCfg, MonotoneCfg, RadialCfg,
        ReplayToken, VertexCount,
    };
    pub use crate::geom2::{GeomCfg, Point, PointOps, Region};
    pub use crate::ring::{Ring, VertexId};
    pub use crate::triangle::Triangle;
    pub use crate::triangulate::{triangulate, Algorithm, Triangulator};
}
