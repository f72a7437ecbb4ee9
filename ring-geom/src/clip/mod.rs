//! Axis-aligned-rectangle clipping: `Clip(geometry, rect, options)`.
//!
//! Each sub-module handles one geometry class; [`clip`] is the dispatcher
//! that preserves the geometry type ladder — a `MultiLineString` that
//! clips down to a single surviving piece is returned as a bare
//! `LineString`, a `MultiPolygon` whose children all survive a single
//! clip stays a `MultiPolygon`, and so on.

mod line;
mod point;
mod polygon;

pub use line::clip_line_string;
pub use point::clip_point;
pub use polygon::clip_polygon;

use crate::geometry::Geometry;
use ring_types::Rect;

/// Options for [`clip`]. Currently carries no fields; accepted as an
/// opaque, ignorable value so future options can be added without
/// breaking the signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipOptions {}

/// Clips `geometry` against the axis-aligned `rect`, preserving geometry
/// class semantics. `options` is accepted but currently has no
/// recognized fields.
pub fn clip(geometry: &Geometry, rect: Rect, _options: Option<&ClipOptions>) -> Geometry {
    match geometry {
        Geometry::Empty => Geometry::Empty,
        Geometry::Point(p) => clip_point(*p, rect),
        Geometry::LineString(points) => clip_line_string(points, rect),
        Geometry::MultiLineString(pieces) => {
            let mut survivors: Vec<Vec<_>> = Vec::new();
            for piece in pieces {
                match clip_line_string(piece, rect) {
                    Geometry::Empty => {}
                    Geometry::LineString(pts) => survivors.push(pts),
                    Geometry::MultiLineString(split) => survivors.extend(split),
                    other => unreachable!("clip_line_string produced {:?}", other.kind()),
                }
            }
            collapse_line_strings(survivors)
        }
        Geometry::Polygon(poly) => clip_polygon(poly, rect),
        Geometry::MultiPolygon(polys) => {
            let survivors: Vec<_> = polys
                .iter()
                .filter_map(|p| match clip_polygon(p, rect) {
                    Geometry::Empty => None,
                    Geometry::Polygon(clipped) => Some(clipped),
                    other => unreachable!("clip_polygon produced {:?}", other.kind()),
                })
                .collect();
            collapse_polygons(survivors)
        }
        Geometry::GeometryCollection(children) => {
            let clipped: Vec<Geometry> = children
                .iter()
                .map(|child| clip(child, rect, _options))
                .filter(|g| !g.is_empty())
                .collect();
            if clipped.is_empty() {
                Geometry::Empty
            } else {
                Geometry::GeometryCollection(clipped)
            }
        }
    }
}

fn collapse_line_strings(mut pieces: Vec<Vec<ring_types::Point>>) -> Geometry {
    match pieces.len() {
        0 => Geometry::Empty,
        1 => Geometry::LineString(pieces.pop().unwrap()),
        _ => Geometry::MultiLineString(pieces),
    }
}

fn collapse_polygons(mut polys: Vec<crate::poly::Poly>) -> Geometry {
    match polys.len() {
        0 => Geometry::Empty,
        1 => Geometry::Polygon(polys.pop().unwrap()),
        _ => Geometry::MultiPolygon(polys),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::poly::Poly;
    use crate::series::Series;
    use ring_types::Point;

    fn square(min: f64, max: f64) -> Box<dyn crate::Ring> {
        Box::new(Series::new(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]))
    }

    #[test]
    fn clip_empty_geometry_stays_empty() {
        assert!(clip(&Geometry::Empty, Rect::from_ordinates(0.0, 0.0, 1.0, 1.0), None).is_empty());
    }

    #[test]
    fn clip_multi_line_string_dropping_empty_children() {
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let geom = Geometry::MultiLineString(vec![
            vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            vec![Point::new(100.0, 100.0), Point::new(200.0, 200.0)],
        ]);
        let out = clip(&geom, rect, None);
        // Only one child survives: cardinality collapses to a bare LineString.
        assert_eq!(out.kind(), "LineString");
    }

    #[test]
    fn clip_multi_polygon_collapses_when_one_survives() {
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let a = Poly::new(square(1.0, 2.0), vec![]);
        let b = Poly::new(square(100.0, 101.0), vec![]);
        let out = clip(&Geometry::MultiPolygon(vec![a, b]), rect, None);
        assert_eq!(out.kind(), "Polygon");
    }

    #[test]
    fn clip_geometry_collection_drops_empty_children() {
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let geom = Geometry::GeometryCollection(vec![
            Geometry::Point(Point::new(1.0, 1.0)),
            Geometry::Point(Point::new(100.0, 100.0)),
        ]);
        let out = clip(&geom, rect, None);
        match out {
            Geometry::GeometryCollection(children) => assert_eq!(children.len(), 1),
            other => panic!("expected GeometryCollection, got {:?}", other.kind()),
        }
    }

    #[test]
    fn disjoint_bbox_clips_to_empty() {
        let rect = Rect::from_ordinates(0.0, 0.0, 1.0, 1.0);
        let poly = Poly::new(square(100.0, 200.0), vec![]);
        assert!(clip(&Geometry::Polygon(poly), rect, None).is_empty());
    }
}
