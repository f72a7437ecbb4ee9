use crate::geometry::Geometry;
use crate::poly::Poly;
use crate::ring::Ring;
use crate::series::Series;
use ring_types::{Point, Rect};

/// `Clip(ring-as-polygon, rect)`: Sutherland-Hodgman clipping against the
/// rectangle's four half-planes, applied to the exterior and
/// independently to each hole.
///
/// A clipped exterior with fewer than three surviving vertices yields
/// [`Geometry::Empty`]. Holes that collapse the same way are dropped
/// rather than propagated as errors. The output is always a single
/// [`Geometry::Polygon`]: a concave ring clipped against this convex
/// rectangle can in principle split into disjoint pieces, but this
/// collapses that case to one polygon rather than detecting and
/// reporting the split, which is lossy for pathological concave inputs.
pub fn clip_polygon(poly: &Poly, rect: Rect) -> Geometry {
    let Some(clipped_exterior) = clip_ring_points(poly.exterior(), rect) else {
        log::trace!("exterior clipped to fewer than 3 vertices against {rect:?}; polygon is empty");
        return Geometry::Empty;
    };

    let hole_count_before = poly.holes().len();
    let holes: Vec<Box<dyn Ring>> = poly
        .holes()
        .iter()
        .filter_map(|h| clip_ring_points(h.as_ref(), rect))
        .map(|pts| close_ring(pts))
        .map(|pts| Box::new(Series::new(pts)) as Box<dyn Ring>)
        .collect();
    if holes.len() != hole_count_before {
        log::trace!("{} of {} holes dropped by clip against {rect:?}", hole_count_before - holes.len(), hole_count_before);
    }

    let exterior = Box::new(Series::new(close_ring(clipped_exterior))) as Box<dyn Ring>;
    Geometry::Polygon(Poly::new(exterior, holes))
}

/// Runs Sutherland-Hodgman on a ring's distinct vertices (no duplicated
/// closing point). Returns `None` when fewer than three vertices survive
/// — the "became empty" case for both exteriors and holes.
fn clip_ring_points(ring: &dyn Ring, rect: Rect) -> Option<Vec<Point>> {
    let points = distinct_vertices(ring);
    if points.is_empty() {
        return None;
    }

    let min = rect.min();
    let max = rect.max();

    let left = clip_half_plane(&points, |p| p.x() >= min.x(), |prev, curr| {
        intersect_vertical(prev, curr, min.x())
    });
    let right = clip_half_plane(&left, |p| p.x() <= max.x(), |prev, curr| {
        intersect_vertical(prev, curr, max.x())
    });
    let bottom = clip_half_plane(&right, |p| p.y() >= min.y(), |prev, curr| {
        intersect_horizontal(prev, curr, min.y())
    });
    let top = clip_half_plane(&bottom, |p| p.y() <= max.y(), |prev, curr| {
        intersect_horizontal(prev, curr, max.y())
    });

    if top.len() < 3 {
        None
    } else {
        Some(top)
    }
}

/// One Sutherland-Hodgman clipping pass against a single half-plane.
fn clip_half_plane(points: &[Point], inside: impl Fn(Point) -> bool, intersect: impl Fn(Point, Point) -> Point) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len();
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..n {
        let curr = points[i];
        let prev = points[(i + n - 1) % n];
        let curr_in = inside(curr);
        let prev_in = inside(prev);
        if curr_in {
            if !prev_in {
                out.push(intersect(prev, curr));
            }
            out.push(curr);
        } else if prev_in {
            out.push(intersect(prev, curr));
        }
    }
    out
}

fn intersect_vertical(prev: Point, curr: Point, x: f64) -> Point {
    let t = (x - prev.x()) / (curr.x() - prev.x());
    Point::new(x, prev.y() + t * (curr.y() - prev.y()))
}

fn intersect_horizontal(prev: Point, curr: Point, y: f64) -> Point {
    let t = (y - prev.y()) / (curr.y() - prev.y());
    Point::new(prev.x() + t * (curr.x() - prev.x()), y)
}

/// The ring's vertices with any duplicated closing point removed.
fn distinct_vertices(ring: &dyn Ring) -> Vec<Point> {
    let pts = ring.points();
    if pts.len() >= 2 && pts.first() == pts.last() {
        pts[..pts.len() - 1].to_vec()
    } else {
        pts.to_vec()
    }
}

/// Re-appends the first vertex so the output ring is explicitly closed.
fn close_ring(mut pts: Vec<Point>) -> Vec<Point> {
    if let Some(&first) = pts.first() {
        pts.push(first);
    }
    pts
}
