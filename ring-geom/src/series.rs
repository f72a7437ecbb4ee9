use crate::bvh::Bvh;
use crate::primitives::orientation;
use crate::ring::Ring;
use ring_types::{Orientation, Point, Rect, Segment};

/// An ordered sequence of points, with a cached bounding box, a closure
/// flag, a lazily-verified convexity flag, and an optional [`Bvh`] over
/// its segments.
///
/// `Series` is the one concrete geometry this crate ships; its "simple"
/// and "indexed" representations are the same `Series` with `tree`
/// absent or present — [`Series::build_tree`] and [`Series::drop_tree`]
/// toggle between them without ever changing a predicate's answer, since
/// every predicate is a free function routed through the single
/// [`Ring`] trait rather than a method on this type.
#[derive(Debug, Clone)]
pub struct Series {
    points: Vec<Point>,
    rect: Option<Rect>,
    explicitly_closed: bool,
    convex: bool,
    tree: Option<Bvh>,
}

impl Series {
    /// Builds a `Series` with no spatial index.
    pub fn new(points: Vec<Point>) -> Self {
        Self::from_points(points, None)
    }

    /// Builds a `Series` and immediately constructs its [`Bvh`].
    pub fn new_indexed(points: Vec<Point>) -> Self {
        let mut series = Self::new(points);
        series.build_tree();
        series
    }

    fn from_points(points: Vec<Point>, tree: Option<Bvh>) -> Self {
        let rect = bounding_rect(&points);
        let explicitly_closed = is_explicitly_closed(&points);
        let convex = compute_convex(&points, explicitly_closed);
        Series {
            points,
            rect,
            explicitly_closed,
            convex,
            tree,
        }
    }

    /// Builds (or rebuilds) the segment [`Bvh`] over this series' current
    /// points. A no-op on predicate results either way — see the type's
    /// docs.
    pub fn build_tree(&mut self) {
        let segs: Vec<Segment> = (0..self.segment_count()).map(|i| self.segment_at(i)).collect();
        log::trace!("building bvh over {} segments", segs.len());
        self.tree = Some(Bvh::build(&segs));
    }

    /// Discards the spatial index, falling back to linear scans.
    pub fn drop_tree(&mut self) {
        self.tree = None;
    }

    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }

    /// The series' spatial index, if built. Its leaves must enumerate
    /// exactly the segments of the series in insertion order; exposed so
    /// tests can check that leaf-completeness property directly.
    pub fn tree(&self) -> Option<&Bvh> {
        self.tree.as_ref()
    }

    fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            0
        } else if self.explicitly_closed {
            n - 1
        } else {
            n
        }
    }

    fn segment_at(&self, idx: usize) -> Segment {
        let n = self.points.len();
        if self.explicitly_closed {
            Segment::new(self.points[idx], self.points[idx + 1])
        } else {
            Segment::new(self.points[idx], self.points[(idx + 1) % n])
        }
    }
}

impl Ring for Series {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn rect(&self) -> Option<Rect> {
        self.rect
    }

    fn closed(&self) -> bool {
        // Ring predicates always treat a series as closed: a missing
        // closing edge is synthesized by `segment_at`/`segment_count`.
        // This flag reports whether that edge was *already* present in
        // the input.
        self.explicitly_closed
    }

    fn convex(&self) -> bool {
        self.convex
    }

    fn is_indexed(&self) -> bool {
        self.tree.is_some()
    }

    fn segment_count(&self) -> usize {
        Series::segment_count(self)
    }

    fn for_each_segment(&self, visit: &mut dyn FnMut(Segment, usize) -> bool) {
        for idx in 0..self.segment_count() {
            if !visit(self.segment_at(idx), idx) {
                return;
            }
        }
    }

    fn search(&self, window: Rect, visit: &mut dyn FnMut(Segment, usize) -> bool) {
        match &self.tree {
            Some(tree) => tree.search(window, visit),
            None => {
                for idx in 0..self.segment_count() {
                    let seg = self.segment_at(idx);
                    if seg.bounding_rect().intersects_rect(&window) && !visit(seg, idx) {
                        return;
                    }
                }
            }
        }
    }

    fn translate(&self, dx: f64, dy: f64) -> Box<dyn Ring> {
        let points: Vec<Point> = self.points.iter().map(|p| p.translated(dx, dy)).collect();
        let had_tree = self.tree.is_some();
        let mut series = Series::new(points);
        if had_tree {
            series.build_tree();
        }
        Box::new(series)
    }

    fn box_clone(&self) -> Box<dyn Ring> {
        Box::new(self.clone())
    }
}

fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let mut iter = points.iter();
    let first = *iter.next()?;
    let mut rect = Rect::from_point(first);
    for &p in iter {
        rect = rect.union_point(p);
    }
    Some(rect)
}

fn is_explicitly_closed(points: &[Point]) -> bool {
    points.len() >= 4 && points.first() == points.last()
}

/// The ring's points without a duplicated closing vertex, used wherever
/// an algorithm wants each distinct vertex exactly once (convexity,
/// Sutherland-Hodgman clipping).
fn effective_points(points: &[Point], explicitly_closed: bool) -> &[Point] {
    if explicitly_closed {
        &points[..points.len() - 1]
    } else {
        points
    }
}

fn compute_convex(points: &[Point], explicitly_closed: bool) -> bool {
    let pts = effective_points(points, explicitly_closed);
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let mut sign: Option<Orientation> = None;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        let c = pts[(i + 2) % n];
        let o = orientation(a, b, c);
        if o == Orientation::Collinear {
            return false;
        }
        match sign {
            None => sign = Some(o),
            Some(s) if s != o => return false,
            _ => {}
        }
    }
    sign.is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    fn rectangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn synthetic_closing_segment_matches_explicit() {
        let open = Series::new(rectangle());
        let mut closed_pts = rectangle();
        closed_pts.push(closed_pts[0]);
        let closed = Series::new(closed_pts);

        let mut open_segs = vec![];
        open.for_each_segment(&mut |seg, _| {
            open_segs.push(seg);
            true
        });
        let mut closed_segs = vec![];
        closed.for_each_segment(&mut |seg, _| {
            closed_segs.push(seg);
            true
        });
        assert_eq!(open_segs, closed_segs);
        assert_eq!(
            open_segs,
            vec![
                Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
                Segment::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
                Segment::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn rectangle_is_convex() {
        let s = Series::new(rectangle());
        assert!(s.convex());
    }

    #[test]
    fn triangle_with_collinear_point_is_not_strictly_convex() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)];
        let s = Series::new(pts);
        assert!(!s.convex());
    }

    #[test]
    fn forward_visitor_halt_stops_before_next_leaf() {
        let s = Series::new(rectangle());
        let mut seen = 0;
        s.for_each_segment(&mut |_seg, _idx| {
            seen += 1;
            false
        });
        assert_eq!(seen, 1);
    }
}
