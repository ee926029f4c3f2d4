//! Monotone sweep triangulation.
//!
//! Model
//! - Split the ring at its leftmost vertex `L` (first minimum x) and rightmost
//!   vertex `R` (first maximum x) into the chain reached from `L` through `next`
//!   links (`Forward`) and the one reached through `prev` links (`Backward`).
//! - Merge both chains by x and sweep with a stack seeded by the first two
//!   vertices. Same-chain vertices clip convex corners off the stack top;
//!   opposite-chain vertices fan across the whole stack.
//!
//! Sign rule
//! - For three sweep-consecutive stack entries `a, b, c` where `c` lies on chain
//!   `k`, the corner at `b` is interior iff
//!   `chain_turn(k, orientation) * cross(a, b, c) > 0`,
//!   with `chain_turn(Forward) = orientation` and `chain_turn(Backward) = -orientation`.
//!   `orientation` is the sign of the ring's signed area.

use crate::geom2::{cross, signed_area, Point};
use crate::ring::Ring;
use crate::triangle::Triangle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Forward,
    Backward,
}

#[inline]
fn chain_turn(chain: Chain, orientation: f64) -> f64 {
    match chain {
        Chain::Forward => orientation,
        Chain::Backward => -orientation,
    }
}

/// Sweep an x-monotone ring left to right, emitting `n - 2` triangles.
///
/// Monotonicity is assumed, not checked.
pub(super) fn sweep(ring: &Ring, out: &mut Vec<Triangle>) {
    let pts: Vec<Point> = ring.points();
    let n = pts.len();
    if n < 3 {
        return;
    }
    let orientation = signed_area(&pts).signum();
    let order = sweep_order(&pts);

    let mut stack: Vec<(usize, Chain)> = vec![order[0], order[1]];
    for &(v, chain) in &order[2..n - 1] {
        let top = stack[stack.len() - 1];
        if chain != top.1 {
            fan_across(&pts, &stack, v, out);
            stack.clear();
            stack.push(top);
            stack.push((v, chain));
        } else {
            stack.push((v, chain));
            while stack.len() >= 3 {
                let k = stack.len();
                let (a, b, c) = (pts[stack[k - 3].0], pts[stack[k - 2].0], pts[stack[k - 1].0]);
                if chain_turn(chain, orientation) * cross(a, b, c) <= 0.0 {
                    break;
                }
                out.push(Triangle::new(a, b, c));
                stack.remove(k - 2);
            }
        }
    }
    let (last, _) = order[n - 1];
    fan_across(&pts, &stack, last, out);
}

/// Emit one triangle per adjacent stack pair, with `apex` as the ear.
fn fan_across(pts: &[Point], stack: &[(usize, Chain)], apex: usize, out: &mut Vec<Triangle>) {
    out.extend(
        stack
            .windows(2)
            .map(|w| Triangle::new(pts[w[0].0], pts[apex], pts[w[1].0])),
    );
}

/// `L`, both chains merged by x (ties favor `Forward`), then `R`.
fn sweep_order(pts: &[Point]) -> Vec<(usize, Chain)> {
    let n = pts.len();
    let mut left = 0;
    let mut right = 0;
    for (i, p) in pts.iter().enumerate() {
        if p.x < pts[left].x {
            left = i;
        }
        if p.x > pts[right].x {
            right = i;
        }
    }
    if left == right {
        // All x equal; any split keeps the count right.
        right = (left + 1) % n;
    }

    let mut forward = Vec::new();
    let mut i = (left + 1) % n;
    while i != right {
        forward.push(i);
        i = (i + 1) % n;
    }
    let mut backward = Vec::new();
    let mut i = (left + n - 1) % n;
    while i != right {
        backward.push(i);
        i = (i + n - 1) % n;
    }

    let mut order = Vec::with_capacity(n);
    order.push((left, Chain::Forward));
    let (mut f, mut b) = (0, 0);
    while f < forward.len() || b < backward.len() {
        let take_forward = match (forward.get(f), backward.get(b)) {
            (Some(&fi), Some(&bi)) => pts[fi].x <= pts[bi].x,
            (Some(_), None) => true,
            _ => false,
        };
        if take_forward {
            order.push((forward[f], Chain::Forward));
            f += 1;
        } else {
            order.push((backward[b], Chain::Backward));
            b += 1;
        }
    }
    order.push((right, Chain::Forward));
    order
}
