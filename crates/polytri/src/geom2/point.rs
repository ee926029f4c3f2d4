//! `Point` operations and the two vertex predicates used by ring classification.

use nalgebra::Vector2;

use super::cfg::GeomCfg;
use super::util::{cross, radians_to_degrees};
use crate::error::{Result, TriangulationError};
use crate::ring::Ring;
use crate::triangle::Triangle;

/// A 2D point (or vector). Immutable value; arithmetic returns new points.
pub type Point = Vector2<f64>;

/// A closed planar region that can answer point membership.
pub trait Region {
    /// Whether `p` lies inside the region (even-odd rule).
    fn contains(&self, p: &Point) -> bool;

    /// Winding of the boundary: `1.0` counterclockwise, `-1.0` clockwise,
    /// `0.0` when the enclosed area is zero.
    fn orientation(&self) -> f64;
}

/// Named point operations on top of nalgebra's vector arithmetic.
pub trait PointOps {
    fn distance_to(&self, p: &Point) -> f64;

    /// Unit vector pointing from `self` toward `p`. NaN components if `p == self`.
    fn direction_to(&self, p: &Point) -> Point;

    /// The point `distance` units from `self` in the direction of `p`.
    fn point_in_direction(&self, p: &Point, distance: f64) -> Point;

    fn midpoint(&self, p: &Point) -> Point;

    /// Axis-aligned proximity: both coordinate deltas are at most `threshold`.
    fn within_threshold(&self, p: &Point, threshold: f64) -> bool;

    /// Angle at `self` between the rays toward `prev` and `next`, in degrees in [0, 180].
    ///
    /// Law of cosines on the three pairwise distances. Fails with
    /// `DegenerateGeometry` if any two of the three points coincide.
    fn angle_at(&self, prev: &Point, next: &Point) -> Result<f64>;

    /// Whether `self` is a convex vertex of `region` given its ring neighbors.
    ///
    /// The raw angle from `angle_at` is the interior angle when the wedge it
    /// measures faces into `region`; otherwise the interior angle is
    /// `360 - angle`. Convex iff the interior angle is below 180 degrees.
    ///
    /// The facing side comes from the turn at `self` against the region's
    /// orientation. Only when `prev`, `self` and `next` are collinear (a
    /// fold-back spike) is a point stepped from `self` toward the midpoint of
    /// `prev`/`next` tested for membership instead. O(|region|).
    fn is_convex_vertex<R: Region + ?Sized>(
        &self,
        prev: &Point,
        next: &Point,
        region: &R,
        cfg: &GeomCfg,
    ) -> Result<bool>;

    /// Whether the triangle `(prev, self, next)` holds no other vertex of `ring`.
    ///
    /// Vertices on the candidate's boundary count as blocking. O(|ring|).
    fn is_ear_vertex(&self, prev: &Point, next: &Point, ring: &Ring) -> bool;
}

impl PointOps for Point {
    #[inline]
    fn distance_to(&self, p: &Point) -> f64 {
        (self - p).norm()
    }

    #[inline]
    fn direction_to(&self, p: &Point) -> Point {
        (p - self).normalize()
    }

    #[inline]
    fn point_in_direction(&self, p: &Point, distance: f64) -> Point {
        self + self.direction_to(p) * distance
    }

    #[inline]
    fn midpoint(&self, p: &Point) -> Point {
        Point::new((self.x + p.x) / 2.0, (self.y + p.y) / 2.0)
    }

    #[inline]
    fn within_threshold(&self, p: &Point, threshold: f64) -> bool {
        (p.x - self.x).abs() <= threshold && (p.y - self.y).abs() <= threshold
    }

    fn angle_at(&self, prev: &Point, next: &Point) -> Result<f64> {
        let to_prev = self.distance_to(prev);
        let to_next = self.distance_to(next);
        let across = prev.distance_to(next);
        if to_prev == 0.0 || to_next == 0.0 || across == 0.0 {
            return Err(TriangulationError::degenerate_at(self));
        }
        let cos = (to_prev * to_prev + to_next * to_next - across * across)
            / (2.0 * to_prev * to_next);
        // Rounding can push |cos| a hair past 1 for straight or spiked vertices.
        let angle = radians_to_degrees(cos.clamp(-1.0, 1.0).acos());
        if !angle.is_finite() {
            return Err(TriangulationError::degenerate_at(self));
        }
        Ok(angle)
    }

    fn is_convex_vertex<R: Region + ?Sized>(
        &self,
        prev: &Point,
        next: &Point,
        region: &R,
        cfg: &GeomCfg,
    ) -> Result<bool> {
        let angle = self.angle_at(prev, next)?;
        let turn = cross(*prev, *self, *next);
        let orientation = region.orientation();
        let faces_inward = if turn != 0.0 && orientation != 0.0 {
            turn * orientation > 0.0
        } else {
            let middle = prev.midpoint(next);
            if middle == *self {
                // Straight vertex: both sides measure exactly 180.
                return Ok(false);
            }
            // Stay inside the wedge so the sample cannot reach another edge.
            let step = cfg
                .probe_distance
                .min(0.5 * self.distance_to(prev).min(self.distance_to(next)))
                .min(0.5 * self.distance_to(&middle));
            region.contains(&self.point_in_direction(&middle, step))
        };
        let interior = if faces_inward { angle } else { 360.0 - angle };
        Ok(interior < 180.0)
    }

    fn is_ear_vertex(&self, prev: &Point, next: &Point, ring: &Ring) -> bool {
        let candidate = Triangle::new(*prev, *self, *next);
        !ring.iter().any(|(_, q)| {
            q != *self
                && q != *prev
                && q != *next
                && (candidate.contains(&q) || candidate.on_boundary(&q))
        })
    }
}
