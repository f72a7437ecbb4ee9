use crate::geometry::Geometry;
use crate::primitives::clip_segment_interval;
use ring_types::{Point, Rect};

/// `Clip(line, rect)`: walks the polyline's segments in order, keeping
/// whichever portion of each lies inside-or-on `rect`. When a piece exits
/// the rectangle it's closed off; re-entering later starts a fresh piece.
/// Disjoint survivors become a [`Geometry::MultiLineString`]; exactly one
/// survivor stays a bare [`Geometry::LineString`]; none yields
/// [`Geometry::Empty`].
///
/// Whether a piece continues into the next segment is decided on the
/// clip *parameter* (`t1 == 1.0` — "this segment's own endpoint survived
/// unclipped"), not on re-deriving and comparing the interpolated point,
/// which floating-point reconstruction could spuriously fail to match
/// bit-for-bit.
pub fn clip_line_string(points: &[Point], rect: Rect) -> Geometry {
    if points.len() < 2 {
        return match points.first() {
            None => Geometry::Empty,
            Some(&p) => {
                if rect.contains_point(p) {
                    Geometry::LineString(vec![p])
                } else {
                    Geometry::Empty
                }
            }
        };
    }

    let mut pieces: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for window in points.windows(2) {
        let (a, b) = (window[0], window[1]);
        match clip_segment_interval(a, b, rect) {
            None => {
                if !current.is_empty() {
                    log::trace!("segment ({a:?} -> {b:?}) exits rect, closing piece of {} points", current.len());
                    pieces.push(std::mem::take(&mut current));
                }
            }
            Some((t0, t1)) => {
                let lerp = |t: f64| Point::new(a.x() + t * (b.x() - a.x()), a.y() + t * (b.y() - a.y()));
                if current.is_empty() {
                    log::trace!("re-entering rect at t={t0} on segment ({a:?} -> {b:?})");
                    current.push(lerp(t0));
                }
                current.push(lerp(t1));
                if t1 < 1.0 {
                    pieces.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    match pieces.len() {
        0 => Geometry::Empty,
        1 => Geometry::LineString(pieces.into_iter().next().unwrap()),
        _ => Geometry::MultiLineString(pieces),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn peak_touching_rect_splits_line_into_two_pieces() {
        let points = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 1.0)];
        let rect = Rect::from_ordinates(1.5, 0.5, 2.5, 1.8);
        let out = clip_line_string(&points, rect);
        match out {
            Geometry::MultiLineString(pieces) => assert_eq!(pieces.len(), 2),
            other => panic!("expected MultiLineString, got {:?}", other),
        }
    }

    #[test]
    fn fully_inside_line_is_unchanged() {
        let points = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 1.0)];
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let out = clip_line_string(&points, rect);
        assert_eq!(out.kind(), "LineString");
        match out {
            Geometry::LineString(pts) => assert_eq!(pts, points),
            _ => unreachable!(),
        }
    }

    #[test]
    fn fully_outside_line_is_empty() {
        let points = vec![Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        assert!(clip_line_string(&points, rect).is_empty());
    }

    #[test]
    fn single_point_line_degenerates_to_point_clip() {
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        assert_eq!(clip_line_string(&[Point::new(5.0, 5.0)], rect).kind(), "LineString");
        assert!(clip_line_string(&[Point::new(50.0, 50.0)], rect).is_empty());
    }

    #[test]
    fn continuous_multi_segment_line_stays_one_piece() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(5.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(1.0, 5.0),
        ];
        let rect = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let out = clip_line_string(&points, rect);
        assert_eq!(out.kind(), "LineString");
    }
}
