//! Ring and polygon predicates: point-in-ring, ring-vs-segment,
//! ring-vs-rect, ring-vs-ring, and ring-vs-poly.
//!
//! Every predicate here is a free function over `&dyn Ring`, never a
//! method, so that the indexed and linear [`crate::Series`]
//! representations run through the exact same body: the only thing that
//! ever differs between them is which segments [`Ring::search`] hands
//! back, never how those segments get judged. Every predicate
//! accordingly has exactly one implementation,
//! dispatching to [`Ring::search`] when an index is present and to
//! [`Ring::for_each_segment`] otherwise, both funnelling into the same
//! per-segment closure.

use crate::poly::Poly;
use crate::primitives::{raycast, segments_cross_transversally, segments_intersect, segments_overlap_properly};
use crate::ring::Ring;
use ring_types::{Point, Rect, Segment};

/// Where a point sits relative to a ring's boundary: exactly on it, or
/// strictly inside per even-odd crossing parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointStatus {
    on_boundary: bool,
    inside_parity: bool,
}

/// Shared core of every point-in-ring test: a single scan (indexed or
/// linear) accumulating raycast crossings, used by [`ring_contains_point`]
/// and by the endpoint checks in [`ring_intersects_segment`] /
/// [`ring_contains_segment`].
fn classify_point(ring: &dyn Ring, p: Point) -> PointStatus {
    let Some(rect) = ring.rect() else {
        return PointStatus { on_boundary: false, inside_parity: false };
    };

    let mut on_boundary = false;
    let mut crossings: usize = 0;
    let mut visit = |seg: Segment, _idx: usize| {
        let r = raycast(p, seg.a, seg.b);
        if r.is_on {
            on_boundary = true;
            return false;
        }
        if r.is_in {
            crossings += 1;
        }
        true
    };

    if ring.is_indexed() {
        // A horizontal sliver from p out to the ring's own bounding box:
        // no segment further right than that can possibly be crossed.
        let far_x = rect.max().x().max(p.x());
        let window = Rect::new(p, Point::new(far_x, p.y()));
        ring.search(window, &mut visit);
    } else {
        ring.for_each_segment(&mut visit);
    }

    PointStatus {
        on_boundary,
        inside_parity: crossings % 2 == 1,
    }
}

/// Jordan-curve point-in-ring test via raycast-crossing parity.
///
/// If any ring segment reports the point lies exactly on it, the result
/// is `allow_on_edge` outright; otherwise it's whether the crossing count
/// is odd.
pub fn ring_contains_point(ring: &dyn Ring, p: Point, allow_on_edge: bool) -> bool {
    let status = classify_point(ring, p);
    if status.on_boundary {
        allow_on_edge
    } else {
        status.inside_parity
    }
}

/// True iff `seg` crosses any ring segment, or either endpoint lies
/// inside-or-on the ring (strictly inside always counts; on-boundary
/// counts iff `allow_on_edge`).
///
/// A transversal crossing (or a collinear overlap of positive length)
/// always counts; a mere endpoint touch between `seg` and a ring edge is
/// gated by `allow_on_edge`, matching the boundary-contact treatment
/// every other ring predicate gives.
pub fn ring_intersects_segment(ring: &dyn Ring, seg: Segment, allow_on_edge: bool) -> bool {
    let mut proper = false;
    let mut touching = false;
    let mut visit = |rseg: Segment, _idx: usize| {
        if segments_overlap_properly(seg.a, seg.b, rseg.a, rseg.b) {
            proper = true;
            return false;
        }
        if segments_intersect(seg.a, seg.b, rseg.a, rseg.b) {
            touching = true;
        }
        true
    };

    let window = seg.bounding_rect();
    if ring.is_indexed() {
        ring.search(window, &mut visit);
    } else {
        ring.for_each_segment(&mut visit);
    }

    if proper {
        return true;
    }
    if touching && allow_on_edge {
        return true;
    }

    for endpoint in [seg.a, seg.b] {
        let status = classify_point(ring, endpoint);
        if status.on_boundary {
            if allow_on_edge {
                return true;
            }
        } else if status.inside_parity {
            return true;
        }
    }
    false
}

/// True iff both endpoints of `seg` are inside-or-on the ring and `seg`
/// never properly (transversally) crosses into the exterior.
pub fn ring_contains_segment(ring: &dyn Ring, seg: Segment, allow_on_edge: bool) -> bool {
    if !ring_contains_point(ring, seg.a, allow_on_edge) || !ring_contains_point(ring, seg.b, allow_on_edge) {
        return false;
    }

    let mut crosses = false;
    let mut visit = |rseg: Segment, _idx: usize| {
        if segments_cross_transversally(seg.a, seg.b, rseg.a, rseg.b) {
            crosses = true;
            return false;
        }
        true
    };
    let window = seg.bounding_rect();
    if ring.is_indexed() {
        ring.search(window, &mut visit);
    } else {
        ring.for_each_segment(&mut visit);
    }
    !crosses
}

/// True iff all four corners of `rect` are inside-or-on the ring and none
/// of the rect's four edges properly crosses any ring edge.
pub fn ring_contains_rect(ring: &dyn Ring, rect: Rect, allow_on_edge: bool) -> bool {
    let corners = rect.corners();
    for corner in corners {
        if !ring_contains_point(ring, corner, allow_on_edge) {
            return false;
        }
    }
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let mut crosses = false;
        let mut visit = |rseg: Segment, _idx: usize| {
            if segments_cross_transversally(a, b, rseg.a, rseg.b) {
                crosses = true;
                return false;
            }
            true
        };
        let window = Segment::new(a, b).bounding_rect();
        if ring.is_indexed() {
            ring.search(window, &mut visit);
        } else {
            ring.for_each_segment(&mut visit);
        }
        if crosses {
            return false;
        }
    }
    true
}

/// True iff any ring segment intersects `rect`, or the ring fully
/// contains `rect`, or `rect` fully contains the ring.
pub fn ring_intersects_rect(ring: &dyn Ring, rect: Rect, allow_on_edge: bool) -> bool {
    let mut hit = false;
    let mut visit = |rseg: Segment, _idx: usize| {
        if crate::primitives::segment_intersects_rect(rseg.a, rseg.b, rect) {
            hit = true;
            return false;
        }
        true
    };
    if ring.is_indexed() {
        ring.search(rect, &mut visit);
    } else {
        ring.for_each_segment(&mut visit);
    }
    if hit {
        return true;
    }

    if ring_contains_rect(ring, rect, allow_on_edge) {
        return true;
    }
    if let Some(ring_rect) = ring.rect() {
        if rect.contains_rect(&ring_rect) {
            return true;
        }
    }
    false
}

/// True iff every vertex of `inner` is inside-or-on `outer` and no edge of
/// `inner` transversally crosses any edge of `outer`.
///
/// A ring contains itself iff `allow_on_edge` — every vertex sits on its
/// own boundary, and a ring's edges are collinear with themselves, so the
/// "no transversal crossing" side is vacuously satisfied. Bowtie /
/// self-intersecting inputs never panic; the parity-based answer is
/// returned as-is.
pub fn ring_contains_ring(outer: &dyn Ring, inner: &dyn Ring, allow_on_edge: bool) -> bool {
    let mut vertices_ok = true;
    inner.for_each_segment(&mut |seg, _idx| {
        if !ring_contains_point(outer, seg.a, allow_on_edge) {
            vertices_ok = false;
            return false;
        }
        true
    });
    if !vertices_ok {
        return false;
    }

    let mut crosses = false;
    inner.for_each_segment(&mut |iseg, _idx| {
        let mut visit = |oseg: Segment, _oidx: usize| {
            if segments_cross_transversally(iseg.a, iseg.b, oseg.a, oseg.b) {
                crosses = true;
                return false;
            }
            true
        };
        let window = iseg.bounding_rect();
        if outer.is_indexed() {
            outer.search(window, &mut visit);
        } else {
            outer.for_each_segment(&mut visit);
        }
        !crosses
    });
    !crosses
}

/// True iff any pair of segments (one from each ring) intersects under
/// the edge-touching rule, or one ring contains a vertex of the other.
pub fn ring_intersects_ring(a: &dyn Ring, b: &dyn Ring, allow_on_edge: bool) -> bool {
    let mut hit = false;
    a.for_each_segment(&mut |aseg, _idx| {
        let mut visit = |bseg: Segment, _bidx: usize| {
            if segments_intersect(aseg.a, aseg.b, bseg.a, bseg.b) {
                hit = true;
                return false;
            }
            true
        };
        let window = aseg.bounding_rect();
        if b.is_indexed() {
            b.search(window, &mut visit);
        } else {
            b.for_each_segment(&mut visit);
        }
        !hit
    });
    if hit {
        return true;
    }

    let mut found = false;
    b.for_each_segment(&mut |bseg, _idx| {
        if ring_contains_point(a, bseg.a, allow_on_edge) {
            found = true;
            return false;
        }
        true
    });
    if found {
        return true;
    }
    a.for_each_segment(&mut |aseg, _idx| {
        if ring_contains_point(b, aseg.a, allow_on_edge) {
            found = true;
            return false;
        }
        true
    });
    found
}

/// Whether `ring` contains `poly` is decided entirely by `ring` vs.
/// `poly`'s exterior; `poly`'s holes don't matter here, since they can
/// only remove area from `poly`, never add area outside `ring`.
pub fn ring_contains_poly(ring: &dyn Ring, poly: &Poly, allow_on_edge: bool) -> bool {
    ring_contains_ring(ring, poly.exterior(), allow_on_edge)
}

/// True iff `ring` intersects `poly`'s exterior and isn't entirely
/// swallowed by any single hole of `poly`.
pub fn ring_intersects_poly(ring: &dyn Ring, poly: &Poly, allow_on_edge: bool) -> bool {
    if !ring_intersects_ring(ring, poly.exterior(), allow_on_edge) {
        return false;
    }
    for hole in poly.holes() {
        // A ring identical to a hole's boundary is still reported as
        // intersecting: boundary contact with a hole never swallows it,
        // matching `Poly::contains_point`'s on-a-hole-boundary rule.
        if ring_contains_ring(hole.as_ref(), ring, false) {
            return false;
        }
    }
    true
}
