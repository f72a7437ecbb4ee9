//! [`Geometry`]: the minimal typed ladder [`crate::clip`] clips against
//! and produces.
//!
//! This is the kernel's stand-in for a full GeoJSON feature/object model:
//! it carries no JSON, CRS, or feature-properties concerns, only the
//! shapes `Clip` needs to preserve class semantics across (a clipped
//! line string that is split becomes a multi-line-string).

use crate::poly::Poly;
use ring_types::Point;

/// A clippable geometry, or the result of clipping one away entirely.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// The result of clipping a geometry entirely out of the window, or
    /// of constructing one from a degenerate/empty input.
    Empty,
    Point(Point),
    /// An open or closed polyline, in traversal order.
    LineString(Vec<Point>),
    /// Zero or more disjoint polylines, produced when clipping splits a
    /// `LineString` into separate pieces.
    MultiLineString(Vec<Vec<Point>>),
    Polygon(Poly),
    MultiPolygon(Vec<Poly>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// True for `Empty`, and for any container geometry all of whose
    /// children are themselves empty (an empty `MultiLineString` has no
    /// pieces at all, for instance).
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Empty => true,
            Geometry::Point(_) => false,
            Geometry::LineString(pts) => pts.is_empty(),
            Geometry::MultiLineString(pieces) => pieces.is_empty(),
            Geometry::Polygon(poly) => poly.is_empty(),
            Geometry::MultiPolygon(polys) => polys.is_empty(),
            Geometry::GeometryCollection(children) => children.iter().all(Geometry::is_empty),
        }
    }

    /// A short, stable name for the geometry's class — handy for test
    /// assertions that only care about the type-ladder collapse rules,
    /// not full structural equality.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Empty => "Empty",
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }
}
