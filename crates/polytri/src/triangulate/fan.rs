//! Fan triangulation from a fixed apex.

use crate::geom2::Point;
use crate::ring::Ring;
use crate::triangle::Triangle;

/// Emit `Triangle(apex, b_i, b_{i+1})` for consecutive pairs after the apex.
///
/// The apex is the ring's first vertex. Convexity is assumed, not checked.
pub(super) fn sweep(ring: &Ring, out: &mut Vec<Triangle>) {
    let pts: Vec<Point> = ring.points();
    let Some((&apex, rest)) = pts.split_first() else {
        return;
    };
    out.extend(rest.windows(2).map(|w| Triangle::new(apex, w[0], w[1])));
}
