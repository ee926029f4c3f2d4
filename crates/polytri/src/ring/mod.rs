//! Cyclic polygon ring with incrementally maintained vertex classification.
//!
//! Purpose
//! - Hold a polygon boundary as an arena of nodes linked by `prev`/`next`
//!   indices. Removal and neighbor lookup are O(1); there is no head/tail
//!   visible to callers and traversal wraps.
//! - Track which vertices are reflex, convex, and ears. `classify` rebuilds the
//!   sets once; `retest` refreshes one vertex after a neighbor was removed.
//!
//! Invariants
//! - Every live vertex is in exactly one of {reflex, convex}; ears ⊆ convex.
//! - Removed vertices are in no set.
//! - The ear queue pops in a deterministic order: after `classify`, reverse
//!   traversal order; vertices that become ears through `retest` are appended.
//!   A vertex that stops being an ear leaves the queue, so one that turns back
//!   into an ear pops from its new position.
//!
//! Code cross-refs: `geom2::PointOps::{is_convex_vertex,is_ear_vertex}`, `triangulate`

use std::collections::VecDeque;

use crate::error::Result;
use crate::geom2::util::{crossing_test, shoelace};
use crate::geom2::{cross, GeomCfg, Point, PointOps, Region};

/// Stable handle of a vertex inside one ring (its insertion position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

#[derive(Clone, Copy, Debug)]
struct Node {
    point: Point,
    prev: usize,
    next: usize,
    alive: bool,
}

/// Classification flags of one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Marks {
    reflex: bool,
    convex: bool,
    ear: bool,
}

/// Cyclic, doubly-linked vertex ring with reflex/convex/ear sets.
#[derive(Clone, Debug)]
pub struct Ring {
    nodes: Vec<Node>,
    marks: Vec<Marks>,
    ear_queue: VecDeque<VertexId>,
    head: Option<usize>,
    len: usize,
    cfg: GeomCfg,
}

impl Ring {
    /// Build a ring from vertices in boundary order (last connects back to first).
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self::with_cfg(points, GeomCfg::default())
    }

    pub fn with_cfg(points: impl IntoIterator<Item = Point>, cfg: GeomCfg) -> Self {
        let pts: Vec<Point> = points.into_iter().collect();
        let n = pts.len();
        let nodes = pts
            .into_iter()
            .enumerate()
            .map(|(i, point)| Node {
                point,
                prev: if i == 0 { n - 1 } else { i - 1 },
                next: if i + 1 == n { 0 } else { i + 1 },
                alive: true,
            })
            .collect();
        Self {
            nodes,
            marks: vec![Marks::default(); n],
            ear_queue: VecDeque::new(),
            head: if n > 0 { Some(0) } else { None },
            len: n,
            cfg,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    pub fn set_cfg(&mut self, cfg: GeomCfg) {
        self.cfg = cfg;
    }

    /// Number of live vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The vertex traversal starts from, if any.
    #[inline]
    pub fn first(&self) -> Option<VertexId> {
        self.head.map(VertexId)
    }

    /// Whether `id` refers to a vertex still in the ring.
    #[inline]
    pub fn is_live(&self, id: VertexId) -> bool {
        self.nodes.get(id.0).map_or(false, |n| n.alive)
    }

    /// Coordinates of vertex `id`. Panics if `id` was never part of this ring.
    #[inline]
    pub fn point(&self, id: VertexId) -> Point {
        self.nodes[id.0].point
    }

    /// Immediate predecessor and successor of `id` in ring order.
    #[inline]
    pub fn neighbors_of(&self, id: VertexId) -> (VertexId, VertexId) {
        let node = &self.nodes[id.0];
        debug_assert!(node.alive, "neighbors_of on a removed vertex");
        (VertexId(node.prev), VertexId(node.next))
    }

    /// Live vertices in traversal order starting at `first()`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Snapshot of vertex coordinates in traversal order.
    pub fn points(&self) -> Vec<Point> {
        self.iter().map(|(_, p)| p).collect()
    }

    /// Detach `v` from the ring and drop it from every classification set.
    ///
    /// Its neighbors become adjacent. Removing an already removed vertex is a no-op.
    pub fn remove_vertex(&mut self, v: VertexId) {
        if !self.is_live(v) {
            return;
        }
        let Node { prev, next, .. } = self.nodes[v.0];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[v.0].alive = false;
        self.marks[v.0] = Marks::default();
        self.len -= 1;
        if self.head == Some(v.0) {
            self.head = if self.len > 0 { Some(next) } else { None };
        }
    }

    /// Rebuild the reflex/convex/ear sets from scratch.
    ///
    /// Idempotent: on an unchanged ring the sets and ear order come out the same.
    pub fn classify(&mut self) -> Result<()> {
        self.marks.iter_mut().for_each(|m| *m = Marks::default());
        self.ear_queue.clear();
        let ids: Vec<VertexId> = self.iter().map(|(id, _)| id).collect();
        let mut ears = Vec::new();
        for id in ids {
            let m = self.evaluate(id)?;
            self.marks[id.0] = m;
            if m.ear {
                ears.push(id);
            }
        }
        self.ear_queue.extend(ears.into_iter().rev());
        Ok(())
    }

    /// Re-classify a single live vertex against the current ring.
    pub fn retest(&mut self, v: VertexId) -> Result<()> {
        debug_assert!(self.is_live(v), "retest on a removed vertex");
        let was_ear = self.marks[v.0].ear;
        let m = self.evaluate(v)?;
        self.marks[v.0] = m;
        if m.ear && !was_ear {
            self.ear_queue.push_back(v);
        } else if was_ear && !m.ear {
            self.ear_queue.retain(|&id| id != v);
        }
        Ok(())
    }

    fn evaluate(&self, v: VertexId) -> Result<Marks> {
        let (prev, next) = self.neighbors_of(v);
        let (pp, p, np) = (self.point(prev), self.point(v), self.point(next));
        let convex = p.is_convex_vertex(&pp, &np, self, &self.cfg)?;
        let ear = convex && p.is_ear_vertex(&pp, &np, self);
        Ok(Marks {
            reflex: !convex,
            convex,
            ear,
        })
    }

    /// Take the next ear in queue order and drop it from the ear set.
    pub fn pop_ear(&mut self) -> Option<VertexId> {
        while let Some(id) = self.ear_queue.pop_front() {
            // Entries of removed vertices are dropped here.
            if self.is_live(id) && self.marks[id.0].ear {
                self.marks[id.0].ear = false;
                return Some(id);
            }
        }
        None
    }

    pub fn is_reflex_at(&self, v: VertexId) -> bool {
        self.marks.get(v.0).map_or(false, |m| m.reflex)
    }

    pub fn is_convex_at(&self, v: VertexId) -> bool {
        self.marks.get(v.0).map_or(false, |m| m.convex)
    }

    pub fn is_ear_at(&self, v: VertexId) -> bool {
        self.marks.get(v.0).map_or(false, |m| m.ear)
    }

    /// Reflex vertices in traversal order.
    pub fn reflex_set(&self) -> Vec<VertexId> {
        self.iter()
            .map(|(id, _)| id)
            .filter(|&id| self.is_reflex_at(id))
            .collect()
    }

    /// Convex vertices in traversal order.
    pub fn convex_set(&self) -> Vec<VertexId> {
        self.iter()
            .map(|(id, _)| id)
            .filter(|&id| self.is_convex_at(id))
            .collect()
    }

    /// Ears in pop order.
    pub fn ear_set(&self) -> Vec<VertexId> {
        let mut seen = vec![false; self.nodes.len()];
        self.ear_queue
            .iter()
            .copied()
            .filter(|&id| {
                let fresh = self.is_ear_at(id) && !seen[id.0];
                seen[id.0] = true;
                fresh
            })
            .collect()
    }

    /// Shoelace signed area; positive for counterclockwise order.
    pub fn signed_area(&self) -> f64 {
        if self.len < 3 {
            return 0.0;
        }
        shoelace(self.iter().map(|(_, p)| p))
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether every vertex turns the same way as the ring (strictly convex).
    ///
    /// Vertices whose turn is within `cfg.area_eps` of zero are tolerated.
    pub fn is_convex(&self) -> bool {
        let pts = self.points();
        let n = pts.len();
        if n < 3 {
            return false;
        }
        let orientation = self.signed_area().signum();
        (0..n).all(|i| {
            let turn = cross(pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n]);
            turn * orientation > -self.cfg.area_eps
        })
    }
}

impl Region for Ring {
    fn contains(&self, p: &Point) -> bool {
        crossing_test(self.iter().map(|(_, q)| q), p)
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

impl FromIterator<Point> for Ring {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Ring::new(iter)
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Ring::new(points)
    }
}

/// Traversal iterator over `(VertexId, Point)` pairs.
pub struct Iter<'a> {
    ring: &'a Ring,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (VertexId, Point);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        let node = &self.ring.nodes[idx];
        self.remaining -= 1;
        self.cursor = Some(node.next);
        Some((VertexId(idx), node.point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests;
