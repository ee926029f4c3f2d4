//! Ear clipping.

use crate::error::{Result, TriangulationError};
use crate::ring::Ring;
use crate::triangle::Triangle;

/// Clip ears from `ring` until two vertices remain, emitting `n - 2` triangles.
///
/// Each step pops an ear `e`, removes it, retests its two neighbors against the
/// smaller ring, and emits `Triangle(prev, e, next)`.
pub(super) fn clip(mut ring: Ring, out: &mut Vec<Triangle>) -> Result<()> {
    let target = ring.len() - 2;
    ring.classify()?;
    while out.len() < target {
        let ear = ring
            .pop_ear()
            .ok_or_else(|| TriangulationError::TriangulationStalled {
                remaining: ring.len(),
            })?;
        let (prev, next) = ring.neighbors_of(ear);
        let t = Triangle::new(ring.point(prev), ring.point(ear), ring.point(next));
        ring.remove_vertex(ear);
        if ring.len() >= 3 {
            ring.retest(prev)?;
            ring.retest(next)?;
        }
        tracing::trace!(ear = ear.0, remaining = ring.len(), "clip");
        out.push(t);
    }
    Ok(())
}
