//! Scalar predicates shared by every ring/segment test: orientation,
//! point-on-segment, raycasting, and segment-segment intersection.
//!
//! Orientation is delegated to the `robust` crate's adaptive-precision
//! `orient2d`, the same predicate `geo`'s `RobustKernel` uses
//! (`geo/src/algorithm/kernels/robust.rs`): it resolves the
//! floating-point tie-breaks the spec calls out as "documented but not
//! promoted to rationals" without us hand-rolling an epsilon.

use ring_types::{Orientation, Point, Segment};

/// Sign of the cross product of `(b - a)` and `(c - a)`.
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let sign = robust::orient2d(
        robust::Coord { x: a.x(), y: a.y() },
        robust::Coord { x: b.x(), y: b.y() },
        robust::Coord { x: c.x(), y: c.y() },
    );
    if sign > 0.0 {
        Orientation::CounterClockwise
    } else if sign < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True iff `p` lies on the closed segment `(a, b)`: collinear with `a`
/// and `b`, and within the segment's bounding box. Handles the degenerate
/// `a == b` segment correctly (only `p == a` is "on" it).
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    if orientation(a, b, p) != Orientation::Collinear {
        return false;
    }
    let (min_x, max_x) = if a.x() <= b.x() { (a.x(), b.x()) } else { (b.x(), a.x()) };
    let (min_y, max_y) = if a.y() <= b.y() { (a.y(), b.y()) } else { (b.y(), a.y()) };
    p.x() >= min_x && p.x() <= max_x && p.y() >= min_y && p.y() <= max_y
}

/// Result of casting a horizontal ray from `p` to `+infinity` against a
/// segment, per the Jordan-curve point-in-polygon rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastResult {
    /// True iff the ray strictly crosses the segment (half-open on the
    /// lower endpoint, so a shared vertex between two ring edges is never
    /// counted twice).
    pub is_in: bool,
    /// True iff `p` lies on the segment itself.
    pub is_on: bool,
}

/// Casts a horizontal ray from `p` toward `+infinity` against segment
/// `(a, b)`.
///
/// If `p` coincides with `a` or `b`, `is_on` is true and `is_in` is
/// false.
pub fn raycast(p: Point, a: Point, b: Point) -> RaycastResult {
    if point_on_segment(p, a, b) {
        return RaycastResult { is_in: false, is_on: true };
    }
    // Half-open rule: an edge is only considered "entering" on one of its
    // two endpoints sharing p's height, so two edges meeting at a vertex
    // level with p contribute exactly one crossing, not zero or two.
    let mut is_in = false;
    if (a.y() > p.y()) != (b.y() > p.y()) {
        let t = (p.y() - a.y()) / (b.y() - a.y());
        let x = a.x() + t * (b.x() - a.x());
        if x > p.x() {
            is_in = true;
        }
    }
    RaycastResult { is_in, is_on: false }
}

/// True iff the closed segments `(a1, a2)` and `(b1, b2)` share at least
/// one point — a proper crossing, an endpoint touch, or a collinear
/// overlap.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if d1 != d2 && d3 != d4 {
        return true;
    }
    if d1 == Orientation::Collinear && point_on_segment(a1, b1, b2) {
        return true;
    }
    if d2 == Orientation::Collinear && point_on_segment(a2, b1, b2) {
        return true;
    }
    if d3 == Orientation::Collinear && point_on_segment(b1, a1, a2) {
        return true;
    }
    if d4 == Orientation::Collinear && point_on_segment(b2, a1, a2) {
        return true;
    }
    false
}

/// True iff the two segments cross transversally, or overlap collinearly
/// on a non-degenerate interval — excluding the case where they merely
/// touch at a shared endpoint.
///
/// This is the predicate ring code reaches for when it needs to tell "the
/// boundary touches" apart from "the boundary is crossed into the
/// exterior" (e.g. `ringContainsRing`'s "no segment of inner properly
/// crosses any segment of outer").
pub fn segments_overlap_properly(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if d1 != d2 && d3 != d4 && d1 != Orientation::Collinear && d2 != Orientation::Collinear {
        return true;
    }

    // Collinear case: overlap only counts as "proper" if the shared
    // interval has positive length, i.e. more than a single shared point.
    if d1 == Orientation::Collinear && d2 == Orientation::Collinear && d3 == Orientation::Collinear && d4 == Orientation::Collinear {
        let (lo_a, hi_a) = axis_extent(a1, a2);
        let (lo_b, hi_b) = axis_extent(b1, b2);
        let lo = lo_a.max(lo_b);
        let hi = hi_a.min(hi_b);
        return hi - lo > 0.0;
    }
    false
}

/// Projects a segment onto whichever axis it varies more along, returning
/// `(min, max)` — used to test collinear overlap length-agnostic of
/// orientation.
fn axis_extent(a: Point, b: Point) -> (f64, f64) {
    if (a.x() - b.x()).abs() >= (a.y() - b.y()).abs() {
        if a.x() <= b.x() { (a.x(), b.x()) } else { (b.x(), a.x()) }
    } else if a.y() <= b.y() {
        (a.y(), b.y())
    } else {
        (b.y(), a.y())
    }
}

/// True iff the two segments cross transversally — a strict crossing with
/// no collinear component at all.
///
/// This is the predicate `contains`-style code reaches for when it must
/// tell "inner's edge dips into outer's exterior" apart from "inner's
/// edge merely runs along outer's boundary" — a ring edge sitting exactly
/// on top of (or partially overlapping) another ring's edge is boundary
/// contact, not an escape into the exterior, and must not fail a
/// containment check (`ringContainsRing(r, r, true) == true` depends on
/// this: a ring's edges are always collinear with themselves).
pub fn segments_cross_transversally(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);
    d1 != d2
        && d3 != d4
        && d1 != Orientation::Collinear
        && d2 != Orientation::Collinear
        && d3 != Orientation::Collinear
        && d4 != Orientation::Collinear
}

/// Bounding rectangle helper used throughout the predicate modules.
pub fn segment_rect(seg: Segment) -> ring_types::Rect {
    seg.bounding_rect()
}

/// Clips segment `(a, b)` to the portion lying inside-or-on `rect`, via
/// Liang-Barsky parametric clipping.
///
/// Returns `None` when the segment misses the rectangle entirely.
/// Degenerate segments (`a == b`) are handled as their own case: the
/// result is `Some((a, a))` iff `a` is inside-or-on `rect`.
pub fn clip_segment_to_rect(a: Point, b: Point, rect: ring_types::Rect) -> Option<(Point, Point)> {
    if a == b {
        return if rect.contains_point(a) { Some((a, a)) } else { None };
    }
    let (t0, t1) = clip_segment_interval(a, b, rect)?;
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    let lerp = |t: f64| Point::new(a.x() + t * dx, a.y() + t * dy);
    Some((lerp(t0), lerp(t1)))
}

/// The `t0..=t1` parameter interval (within `[0, 1]`) of segment `(a, b)`
/// lying inside-or-on `rect`, where `a` is `t = 0` and `b` is `t = 1`.
///
/// `None` iff the segment misses the rectangle. Exposed separately from
/// [`clip_segment_to_rect`] so line-walking code can test "did this
/// segment reach its own endpoint unclipped" via `t1 == 1.0` — an exact
/// comparison on the parameter, which re-deriving the endpoint through
/// floating-point interpolation and comparing points could spuriously
/// miss.
pub fn clip_segment_interval(a: Point, b: Point, rect: ring_types::Rect) -> Option<(f64, f64)> {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (-dx, a.x() - rect.min().x()),
        (dx, rect.max().x() - a.x()),
        (-dy, a.y() - rect.min().y()),
        (dy, rect.max().y() - a.y()),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((t0, t1))
}

/// True iff segment `(a, b)` shares at least one point with `rect`.
pub fn segment_intersects_rect(a: Point, b: Point, rect: ring_types::Rect) -> bool {
    clip_segment_to_rect(a, b, rect).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orientation_basic() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 1.0);
        assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
        assert_eq!(orientation(a, c, b), Orientation::Clockwise);
        assert_eq!(orientation(a, b, Point::new(2.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn raycast_on_endpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let r = raycast(a, a, b);
        assert!(r.is_on);
        assert!(!r.is_in);
    }

    #[test]
    fn segments_intersect_negative_cases() {
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(11.0, 0.0),
            Point::new(21.0, 10.0)
        ));
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(11.0, 0.0),
            Point::new(21.0, 0.0)
        ));
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(1.0, 0.0),
            Point::new(11.0, 10.0)
        ));
    }

    #[test]
    fn segments_intersect_crossing() {
        assert!(segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0)
        ));
    }

    #[test]
    fn collinear_overlap_counts_as_intersecting() {
        assert!(segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(15.0, 0.0)
        ));
        assert!(segments_overlap_properly(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(15.0, 0.0)
        ));
    }

    #[test]
    fn touching_at_endpoint_is_not_a_proper_overlap() {
        let a1 = Point::new(0.0, 0.0);
        let a2 = Point::new(10.0, 0.0);
        let b1 = Point::new(10.0, 0.0);
        let b2 = Point::new(20.0, 0.0);
        assert!(segments_intersect(a1, a2, b1, b2));
        assert!(!segments_overlap_properly(a1, a2, b1, b2));
    }

    #[test]
    fn a_segment_never_crosses_itself_transversally() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(!segments_cross_transversally(a, b, a, b));
        assert!(!segments_cross_transversally(a, b, b, a));
    }

    #[test]
    fn clip_segment_fully_inside() {
        let rect = ring_types::Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let got = clip_segment_to_rect(Point::new(1.0, 1.0), Point::new(9.0, 9.0), rect);
        assert_eq!(got, Some((Point::new(1.0, 1.0), Point::new(9.0, 9.0))));
    }

    #[test]
    fn clip_segment_partially_outside() {
        let rect = ring_types::Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let got = clip_segment_to_rect(Point::new(-5.0, 5.0), Point::new(5.0, 5.0), rect);
        assert_eq!(got, Some((Point::new(0.0, 5.0), Point::new(5.0, 5.0))));
    }

    #[test]
    fn clip_segment_missing_rect_is_none() {
        let rect = ring_types::Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let got = clip_segment_to_rect(Point::new(-5.0, -5.0), Point::new(-1.0, -1.0), rect);
        assert_eq!(got, None);
    }

    #[test]
    fn degenerate_segment_clips_to_itself_or_nothing() {
        let rect = ring_types::Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let inside = Point::new(5.0, 5.0);
        let outside = Point::new(50.0, 50.0);
        assert_eq!(clip_segment_to_rect(inside, inside, rect), Some((inside, inside)));
        assert_eq!(clip_segment_to_rect(outside, outside, rect), None);
    }
}
