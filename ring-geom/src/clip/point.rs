use crate::geometry::Geometry;
use ring_types::{Point, Rect};

/// `Clip(point, rect)`: the point itself if inside-or-on `rect`, else
/// [`Geometry::Empty`].
pub fn clip_point(p: Point, rect: Rect) -> Geometry {
    if rect.contains_point(p) {
        Geometry::Point(p)
    } else {
        Geometry::Empty
    }
}
