//! `Poly`: an exterior ring plus zero or more hole rings, and the
//! polygon-level predicates built from the ring primitives in
//! [`crate::predicates`].

use crate::predicates;
use crate::ring::Ring;
use ring_types::{Point, Rect, Segment};

/// An exterior ring plus an ordered list of hole rings.
///
/// A `Poly` exclusively owns its rings — no ring is ever shared across
/// two polygons, and [`Poly::translate`] deep-copies both the exterior
/// and every hole. The kernel does not validate that holes lie inside
/// the exterior, nor that holes are mutually disjoint; invalid input is
/// accepted and predicates return conservative, well-defined answers
/// rather than rejecting it.
#[derive(Debug, Clone)]
pub struct Poly {
    exterior: Box<dyn Ring>,
    holes: Vec<Box<dyn Ring>>,
}

impl Poly {
    pub fn new(exterior: Box<dyn Ring>, holes: Vec<Box<dyn Ring>>) -> Self {
        Poly { exterior, holes }
    }

    pub fn exterior(&self) -> &dyn Ring {
        self.exterior.as_ref()
    }

    pub fn holes(&self) -> &[Box<dyn Ring>] {
        &self.holes
    }

    /// True iff the exterior carries no points at all.
    pub fn is_empty(&self) -> bool {
        self.exterior.points().is_empty()
    }

    /// The exterior ring's bounding box, or `None` for an empty polygon.
    pub fn rect(&self) -> Option<Rect> {
        self.exterior.rect()
    }

    /// `p` is in the exterior ring (boundary counts as inside) and not
    /// strictly inside any hole (a point on a hole's boundary is still
    /// inside the polygon).
    pub fn contains_point(&self, p: Point) -> bool {
        if !predicates::ring_contains_point(self.exterior(), p, true) {
            return false;
        }
        !self.holes.iter().any(|h| predicates::ring_contains_point(h.as_ref(), p, false))
    }

    /// A point either intersects or doesn't intersect a region — there's
    /// no boundary-only distinction for a zero-dimensional probe, so this
    /// is exactly [`Poly::contains_point`].
    pub fn intersects_point(&self, p: Point) -> bool {
        self.contains_point(p)
    }

    /// `other`'s exterior is fully inside this polygon's exterior, and
    /// every one of this polygon's holes that overlaps `other`'s exterior
    /// is itself fully swallowed by one of `other`'s holes (the
    /// hole-eats-hole rule: `other`'s hole must cover this hole locally
    /// for `other` to truly sit inside the space this hole carves out).
    pub fn contains_poly(&self, other: &Poly) -> bool {
        if !predicates::ring_contains_ring(self.exterior(), other.exterior(), true) {
            return false;
        }
        for my_hole in &self.holes {
            if predicates::ring_intersects_ring(my_hole.as_ref(), other.exterior(), false) {
                let covered = other
                    .holes
                    .iter()
                    .any(|other_hole| predicates::ring_contains_ring(other_hole.as_ref(), my_hole.as_ref(), true));
                if !covered {
                    return false;
                }
            }
        }
        true
    }

    /// This polygon intersects `other` iff `other`'s exterior ring
    /// intersects this polygon (boundary touches count).
    pub fn intersects_poly(&self, other: &Poly) -> bool {
        predicates::ring_intersects_poly(other.exterior(), self, true)
    }

    /// Exterior-inclusion minus hole-inclusion, mirroring
    /// [`Poly::contains_point`]'s composition.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        if !predicates::ring_contains_rect(self.exterior(), rect, true) {
            return false;
        }
        !self.holes.iter().any(|h| predicates::ring_intersects_rect(h.as_ref(), rect, false))
    }

    pub fn intersects_rect(&self, rect: Rect) -> bool {
        if !predicates::ring_intersects_rect(self.exterior(), rect, true) {
            return false;
        }
        !self.holes.iter().any(|h| predicates::ring_contains_rect(h.as_ref(), rect, false))
    }

    pub fn contains_segment(&self, seg: Segment) -> bool {
        if !predicates::ring_contains_segment(self.exterior(), seg, true) {
            return false;
        }
        !self.holes.iter().any(|h| predicates::ring_intersects_segment(h.as_ref(), seg, false))
    }

    pub fn intersects_segment(&self, seg: Segment) -> bool {
        if !predicates::ring_intersects_segment(self.exterior(), seg, true) {
            return false;
        }
        !self.holes.iter().any(|h| predicates::ring_contains_segment(h.as_ref(), seg, false))
    }

    /// A polyline is contained iff every one of its segments is, derived
    /// from the ring-vs-segment primitives the same way
    /// [`Poly::contains_rect`] is derived from ring-vs-rect.
    pub fn contains_line(&self, points: &[Point]) -> bool {
        match points.len() {
            0 => true,
            1 => self.contains_point(points[0]),
            _ => line_segments(points).all(|seg| self.contains_segment(seg)),
        }
    }

    /// A polyline intersects the polygon iff any one of its segments
    /// does.
    pub fn intersects_line(&self, points: &[Point]) -> bool {
        match points.len() {
            0 => false,
            1 => self.contains_point(points[0]),
            _ => line_segments(points).any(|seg| self.intersects_segment(seg)),
        }
    }

    /// Deep-copies the exterior and every hole, translated by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Poly {
        Poly {
            exterior: self.exterior.translate(dx, dy),
            holes: self.holes.iter().map(|h| h.translate(dx, dy)).collect(),
        }
    }
}

fn line_segments(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(|w| Segment::new(w[0], w[1]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::series::Series;

    fn square(min: f64, max: f64) -> Box<dyn Ring> {
        Box::new(Series::new(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]))
    }

    #[test]
    fn point_in_hole_is_not_in_polygon() {
        let poly = Poly::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert!(poly.contains_point(Point::new(1.0, 1.0)));
        assert!(!poly.contains_point(Point::new(5.0, 5.0)));
        // On the hole boundary is still inside the polygon.
        assert!(poly.contains_point(Point::new(4.0, 5.0)));
    }

    #[test]
    fn intersects_point_matches_contains_point() {
        let poly = Poly::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert_eq!(poly.intersects_point(Point::new(1.0, 1.0)), poly.contains_point(Point::new(1.0, 1.0)));
        assert_eq!(poly.intersects_point(Point::new(5.0, 5.0)), poly.contains_point(Point::new(5.0, 5.0)));
    }

    #[test]
    fn rect_is_the_exterior_bounding_box() {
        let poly = Poly::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert_eq!(poly.rect(), Some(Rect::from_ordinates(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn contains_poly_respects_hole_eats_hole_rule() {
        let outer = Poly::new(square(0.0, 10.0), vec![square(3.0, 7.0)]);
        // A polygon with a smaller hole inside the same cavity still
        // pokes into the part of `outer`'s hole its own hole doesn't
        // cover — not fully contained.
        let inner_same_hole = Poly::new(square(1.0, 9.0), vec![square(3.0, 7.0)]);
        assert!(outer.contains_poly(&inner_same_hole));

        let inner_smaller_hole = Poly::new(square(1.0, 9.0), vec![square(3.5, 6.5)]);
        assert!(!outer.contains_poly(&inner_smaller_hole));
    }

    #[test]
    fn translate_deep_copies_exterior_and_holes() {
        let poly = Poly::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        let moved = poly.translate(100.0, 100.0);
        assert!(poly.contains_point(Point::new(1.0, 1.0)));
        assert!(!moved.contains_point(Point::new(1.0, 1.0)));
        assert!(moved.contains_point(Point::new(101.0, 101.0)));
    }

    #[test]
    fn contains_line_and_intersects_line() {
        let poly = Poly::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert!(poly.contains_line(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]));
        assert!(!poly.contains_line(&[Point::new(1.0, 1.0), Point::new(5.0, 5.0)]));
        assert!(poly.intersects_line(&[Point::new(-5.0, 5.0), Point::new(5.0, 5.0)]));
    }
}
