use crate::Point;

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// An axis-aligned rectangle defined by two corner [`Point`]s.
///
/// The constructor normalizes its two corners so `min.x() <= max.x()` and
/// `min.y() <= max.y()` always hold — callers never have to worry about
/// corner order. `Rect` itself is never empty; the "no area indexed yet"
/// state belongs to the owning `Series` (see `ring-geom`), not to `Rect`.
///
/// # Examples
///
/// ```
/// use ring_types::{Point, Rect};
///
/// let r = Rect::new(Point::new(10.0, 20.0), Point::new(30.0, 10.0));
/// assert_eq!(r.min(), Point::new(10.0, 10.0));
/// assert_eq!(r.max(), Point::new(30.0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    /// Builds a rectangle from two corners in any order.
    pub fn new(a: Point, b: Point) -> Self {
        let (min_x, max_x) = if a.x() <= b.x() { (a.x(), b.x()) } else { (b.x(), a.x()) };
        let (min_y, max_y) = if a.y() <= b.y() { (a.y(), b.y()) } else { (b.y(), a.y()) };
        Rect {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Builds a rectangle from raw `(min_x, min_y, max_x, max_y)` ordinates.
    pub fn from_ordinates(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// A rectangle collapsed to a single point, the degenerate case the
    /// kernel treats "a zero-area rect behaves as a point" for.
    pub fn from_point(p: Point) -> Self {
        Rect { min: p, max: p }
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: Point::new(self.min.x().min(other.min.x()), self.min.y().min(other.min.y())),
            max: Point::new(self.max.x().max(other.max.x()), self.max.y().max(other.max.y())),
        }
    }

    /// Expands (if needed) to also enclose `p`.
    pub fn union_point(&self, p: Point) -> Rect {
        self.union(&Rect::from_point(p))
    }

    /// Standard closed-box containment: true iff `p` lies inside or on
    /// the boundary of this rectangle.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
    }

    /// Standard closed-box overlap test.
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        self.min.x() <= other.max.x()
            && self.max.x() >= other.min.x()
            && self.min.y() <= other.max.y()
            && self.max.y() >= other.min.y()
    }

    /// True iff `other` is fully inside-or-on this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// The four corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x(), self.min.y()),
            self.max,
            Point::new(self.min.x(), self.max.y()),
        ]
    }
}

#[cfg(feature = "approx")]
impl AbsDiffEq for Rect {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

#[cfg(feature = "approx")]
impl RelativeEq for Rect {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl UlpsEq for Rect {
    #[inline]
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.min.ulps_eq(&other.min, epsilon, max_ulps) && self.max.ulps_eq(&other.max, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalizes_corner_order() {
        let r = Rect::new(Point::new(20.0, 5.0), Point::new(5.0, 20.0));
        assert_eq!(r.min(), Point::new(5.0, 5.0));
        assert_eq!(r.max(), Point::new(20.0, 20.0));
    }

    #[test]
    fn zero_area_rect_behaves_as_point() {
        let r = Rect::from_point(Point::new(1.0, 1.0));
        assert!(r.contains_point(Point::new(1.0, 1.0)));
        assert!(!r.contains_point(Point::new(1.0, 1.1)));
    }

    #[test]
    fn intersects_is_closed_box() {
        let a = Rect::from_ordinates(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_ordinates(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects_rect(&b));
    }
}
