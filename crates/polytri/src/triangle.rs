//! Output triangle with `from`/`ear`/`to` roles.
//!
//! `from` and `to` are the base edge of the clipped ear (or the current sweep
//! step) and `ear` is the apex. Consumers animate a line from `from` toward `to`
//! while highlighting `ear`; the labels carry no other meaning.

use crate::geom2::util::{crossing_test, on_segment};
use crate::geom2::{Point, Region};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub from: Point,
    pub ear: Point,
    pub to: Point,
}

impl Triangle {
    #[inline]
    pub fn new(from: Point, ear: Point, to: Point) -> Self {
        Self { from, ear, to }
    }

    /// Vertices in `[from, ear, to]` order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.from, self.ear, self.to]
    }

    /// Positive when `from → ear → to` runs counterclockwise.
    pub fn signed_area(&self) -> f64 {
        let a = self.ear - self.from;
        let b = self.to - self.from;
        0.5 * (a.x * b.y - a.y * b.x)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn centroid(&self) -> Point {
        (self.from + self.ear + self.to) / 3.0
    }

    /// Whether `p` lies on one of the three edges.
    pub fn on_boundary(&self, p: &Point) -> bool {
        on_segment(self.from, self.ear, *p)
            || on_segment(self.ear, self.to, *p)
            || on_segment(self.to, self.from, *p)
    }

    /// Whether `v` is one of the three corners (exact equality).
    pub fn has_vertex(&self, v: &Point) -> bool {
        self.from == *v || self.ear == *v || self.to == *v
    }
}

impl Region for Triangle {
    /// Same even-odd test the ring uses, over the 3-vertex polygon.
    fn contains(&self, p: &Point) -> bool {
        crossing_test(self.vertices(), p)
    }

    fn orientation(&self) -> f64 {
        let area = self.signed_area();
        if area == 0.0 {
            0.0
        } else {
            area.signum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn tri() -> Triangle {
        Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0])
    }

    #[test]
    fn area_and_orientation() {
        let t = tri();
        assert!((t.signed_area() - 6.0).abs() < 1e-12);
        let flipped = Triangle::new(t.to, t.ear, t.from);
        assert!((flipped.signed_area() + 6.0).abs() < 1e-12);
        assert!((flipped.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let c = tri().centroid();
        assert!((c - vector![4.0 / 3.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn containment_and_boundary() {
        let t = tri();
        assert!(t.contains(&vector![1.0, 1.0]));
        assert!(!t.contains(&vector![3.0, 3.0]));
        assert!(t.on_boundary(&vector![2.0, 0.0]));
        assert!(t.on_boundary(&vector![0.0, 1.5]));
        assert!(!t.on_boundary(&vector![1.0, 1.0]));
        assert!(t.has_vertex(&vector![4.0, 0.0]));
        assert!(!t.has_vertex(&vector![4.0, 0.1]));
    }
}
