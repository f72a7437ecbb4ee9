#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// An ordered pair `(x, y)` of finite reals on the Euclidean plane.
///
/// Two points are equal iff both components are bit-equal — `Point`
/// derives `PartialEq` directly over its `f64` fields rather than
/// comparing within a tolerance. Code that wants a tolerant comparison
/// (tests, mostly) should reach for [`AbsDiffEq`]/[`RelativeEq`] behind
/// the `approx` feature instead of loosening this type's `==`.
///
/// # Examples
///
/// ```
/// use ring_types::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point from its `x`/`y` ordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns a new point translated by `(dx, dy)`.
    ///
    /// Translation never mutates in place; every geometry built on top of
    /// `Point` follows the same rule (see `Series::translate`).
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(xy: (f64, f64)) -> Self {
        Point::new(xy.0, xy.1)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Point::new(xy[0], xy[1])
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(feature = "approx")]
impl AbsDiffEq for Point {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

#[cfg(feature = "approx")]
impl RelativeEq for Point {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl UlpsEq for Point {
    #[inline]
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}
