//! 2D points, vertex predicates, and ring utilities.
//!
//! Purpose
//! - `Point` is `nalgebra::Vector2<f64>`; the named operations the engine needs
//!   (distance, direction, offset points, interior angle) live on `PointOps`.
//! - The two vertex predicates (`is_convex_vertex`, `is_ear_vertex`) are the
//!   foundation of ring classification and ear clipping.
//!
//! Conventions
//! - Point equality is exact coordinate equality (no epsilon).
//! - Angles are reported in degrees in [0, 180].
//! - Code cross-refs: `ring::Ring`, `triangle::Triangle`, `cfg::GeomCfg`

pub mod cfg;
mod point;
pub mod rand;
pub mod util;

pub use cfg::GeomCfg;
pub use point::{Point, PointOps, Region};
pub use util::{cross, degrees_to_radians, radians_to_degrees, ring_neighbors, signed_area};
