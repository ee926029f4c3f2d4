use super::*;

fn ring(pts: &[(f64, f64)]) -> Ring {
    pts.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn arrow() -> Ring {
    ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0), (0.0, 4.0)])
}

#[test]
fn neighbors_wrap_around_cycle() {
    let r = arrow();
    assert_eq!(r.neighbors_of(VertexId(0)), (VertexId(4), VertexId(1)));
    assert_eq!(r.neighbors_of(VertexId(4)), (VertexId(3), VertexId(0)));
    assert_eq!(r.neighbors_of(VertexId(2)), (VertexId(1), VertexId(3)));
}

#[test]
fn remove_vertex_relinks_neighbors() {
    let mut r = arrow();
    r.remove_vertex(VertexId(0));
    assert_eq!(r.len(), 4);
    assert!(!r.is_live(VertexId(0)));
    assert_eq!(r.neighbors_of(VertexId(4)), (VertexId(3), VertexId(1)));
    assert_eq!(r.neighbors_of(VertexId(1)), (VertexId(4), VertexId(2)));
    assert_eq!(r.first(), Some(VertexId(1)));
    assert_eq!(
        r.points(),
        vec![
            Point::new(4.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0)
        ]
    );
    // second removal of the same vertex is a no-op
    r.remove_vertex(VertexId(0));
    assert_eq!(r.len(), 4);
}

#[test]
fn remove_down_to_empty() {
    let mut r = ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    for i in 0..3 {
        r.remove_vertex(VertexId(i));
    }
    assert!(r.is_empty());
    assert_eq!(r.first(), None);
    assert_eq!(r.iter().count(), 0);
}

#[test]
fn classify_arrow_sets() {
    let mut r = arrow();
    r.classify().unwrap();
    assert_eq!(r.reflex_set(), vec![VertexId(2)]);
    assert_eq!(
        r.convex_set(),
        vec![VertexId(0), VertexId(1), VertexId(3), VertexId(4)]
    );
    // Only the candidate at (0,0) contains the reflex vertex.
    assert!(r.is_ear_at(VertexId(1)));
    assert!(r.is_ear_at(VertexId(3)));
    assert!(r.is_ear_at(VertexId(4)));
    assert!(!r.is_ear_at(VertexId(0)));
    assert!(!r.is_ear_at(VertexId(2)));
    // reverse traversal order
    assert_eq!(r.ear_set(), vec![VertexId(4), VertexId(3), VertexId(1)]);
}

#[test]
fn classify_is_idempotent() {
    let mut r = arrow();
    r.classify().unwrap();
    let first = (r.reflex_set(), r.convex_set(), r.ear_set());
    r.classify().unwrap();
    let second = (r.reflex_set(), r.convex_set(), r.ear_set());
    assert_eq!(first, second);
}

#[test]
fn retest_after_removal_matches_full_classify() {
    let mut r = arrow();
    r.classify().unwrap();
    let ear = r.pop_ear().unwrap();
    assert_eq!(ear, VertexId(4));
    let (prev, next) = r.neighbors_of(ear);
    r.remove_vertex(ear);
    r.retest(prev).unwrap();
    r.retest(next).unwrap();

    let mut fresh = Ring::new(r.points());
    fresh.classify().unwrap();
    let live: Vec<VertexId> = r.iter().map(|(id, _)| id).collect();
    for (k, id) in live.iter().enumerate() {
        assert_eq!(r.is_reflex_at(*id), fresh.is_reflex_at(VertexId(k)));
        assert_eq!(r.is_convex_at(*id), fresh.is_convex_at(VertexId(k)));
    }
    // removed vertex is gone from every set
    assert!(!r.is_convex_at(ear) && !r.is_ear_at(ear) && !r.is_reflex_at(ear));
}

#[test]
fn classify_fails_on_duplicate_vertex() {
    let mut r = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(matches!(
        r.classify(),
        Err(crate::TriangulationError::DegenerateGeometry { .. })
    ));
}

#[test]
fn pop_ear_drains_queue() {
    let mut r = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    r.classify().unwrap();
    assert_eq!(r.ear_set().len(), 4);
    let mut popped = Vec::new();
    while let Some(id) = r.pop_ear() {
        popped.push(id);
    }
    assert_eq!(
        popped,
        vec![VertexId(3), VertexId(2), VertexId(1), VertexId(0)]
    );
    assert!(r.ear_set().is_empty());
}

#[test]
fn ear_that_drops_out_and_returns_goes_to_the_back() {
    let mut r = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    r.classify().unwrap();
    assert_eq!(
        r.ear_set(),
        vec![VertexId(3), VertexId(2), VertexId(1), VertexId(0)]
    );
    // Flatten (10,10) onto the diagonal, then restore it.
    r.nodes[2].point = Point::new(5.0, 5.0);
    r.retest(VertexId(2)).unwrap();
    assert!(!r.is_ear_at(VertexId(2)));
    assert_eq!(r.ear_set(), vec![VertexId(3), VertexId(1), VertexId(0)]);
    r.nodes[2].point = Point::new(10.0, 10.0);
    r.retest(VertexId(2)).unwrap();
    assert!(r.is_ear_at(VertexId(2)));

    let mut popped = Vec::new();
    while let Some(id) = r.pop_ear() {
        popped.push(id);
    }
    assert_eq!(
        popped,
        vec![VertexId(3), VertexId(1), VertexId(0), VertexId(2)]
    );
}

#[test]
fn thin_parts_classify_by_their_own_turn() {
    // C shape whose lower arm dips slightly at (10.5, 0.04).
    let mut c = ring(&[
        (0.0, 0.0),
        (20.0, 0.0),
        (20.0, 0.05),
        (10.5, 0.04),
        (1.0, 0.05),
        (1.0, 0.9),
        (20.0, 0.9),
        (20.0, 1.2),
        (0.0, 1.2),
    ]);
    c.classify().unwrap();
    assert_eq!(c.reflex_set(), vec![VertexId(3), VertexId(4), VertexId(5)]);
    assert!(!c.is_ear_at(VertexId(3)));

    // Strip whose bottom bends outward at (10, -0.01).
    let mut strip = ring(&[(0.0, 0.0), (10.0, -0.01), (20.0, 0.0), (20.0, 0.05), (0.0, 0.05)]);
    strip.classify().unwrap();
    assert!(strip.is_convex_at(VertexId(1)));
    assert!(strip.reflex_set().is_empty());
}

#[test]
fn area_contains_and_convexity() {
    let r = arrow();
    // 16 minus the notch triangle (4,0),(2,1),(4,4) of area 4
    assert!((r.area() - 12.0).abs() < 1e-12);
    assert!(r.signed_area() > 0.0);
    assert!(r.contains(&Point::new(1.0, 2.0)));
    assert!(!r.contains(&Point::new(3.5, 2.0)));
    assert!(!r.is_convex());
    let sq = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert!(sq.is_convex());
    let cw: Ring = sq.points().into_iter().rev().collect();
    assert!(cw.is_convex());
    assert!(cw.signed_area() < 0.0);
    assert_eq!(sq.orientation(), 1.0);
    assert_eq!(cw.orientation(), -1.0);
    let flat = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert_eq!(flat.orientation(), 0.0);
}

#[test]
fn clone_is_independent() {
    let original = arrow();
    let mut copy = original.clone();
    copy.remove_vertex(VertexId(2));
    assert_eq!(original.len(), 5);
    assert_eq!(copy.len(), 4);
}
