//! Small utilities: angle conversion, ring index wrap-around, orientation and area.

use super::Point;

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Previous and next positions of `index` in a cyclic sequence of length `len`.
///
/// Panics if `len == 0`.
#[inline]
pub fn ring_neighbors(index: usize, len: usize) -> (usize, usize) {
    assert!(len > 0, "ring_neighbors on an empty ring");
    let prev = if index == 0 { len - 1 } else { index - 1 };
    let next = if index + 1 >= len { 0 } else { index + 1 };
    (prev, next)
}

/// z-component of `(b - a) × (c - b)`: positive for a left (counterclockwise) turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

/// Shoelace signed area; positive for counterclockwise vertex order.
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace(points.iter().copied())
}

/// Shoelace signed area of the closed polyline through `vertices`.
pub(crate) fn shoelace<I>(vertices: I) -> f64
where
    I: IntoIterator<Item = Point>,
{
    let mut iter = vertices.into_iter();
    let first = match iter.next() {
        Some(v) => v,
        None => return 0.0,
    };
    let mut acc = 0.0;
    let mut p = first;
    for q in iter {
        acc += p.x * q.y - q.x * p.y;
        p = q;
    }
    acc += p.x * first.y - first.x * p.y;
    0.5 * acc
}

/// Even-odd ray crossing test of `p` against the closed polyline through `vertices`.
///
/// Points exactly on the boundary may land on either side.
pub(crate) fn crossing_test<I>(vertices: I, p: &Point) -> bool
where
    I: IntoIterator<Item = Point>,
{
    let mut iter = vertices.into_iter();
    let first = match iter.next() {
        Some(v) => v,
        None => return false,
    };
    let mut inside = false;
    let mut a = first;
    let mut step = |a: Point, b: Point| {
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_at {
                inside = !inside;
            }
        }
    };
    for b in iter {
        step(a, b);
        a = b;
    }
    step(a, first);
    inside
}

/// Whether `p` lies on the closed segment `a`–`b` (exact collinearity).
#[inline]
pub(crate) fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let ab = b - a;
    let ap = p - a;
    if ab.x * ap.y - ab.y * ap.x != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
