//! Shared helpers for the acceptance-test binaries in this directory.
//! Not a test binary itself — `tests/common/` is a subdirectory, so cargo
//! doesn't compile it as its own integration-test target.

use ring_geom::{Point, Series};
use std::path::Path;

/// Loads a plain `x,y`-per-line coordinate list into a point vector.
///
/// Used for the large jagged "Arizona-boundary-style" ring fixture that
/// stress-tests indexed vs. linear point-in-ring agreement across many
/// random query points.
pub fn load_fixture_points(name: &str) -> Vec<Point> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading fixture {path:?}: {e}"));
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (x, y) = line.split_once(',').unwrap_or_else(|| panic!("malformed fixture line: {line:?}"));
            Point::new(x.trim().parse().unwrap(), y.trim().parse().unwrap())
        })
        .collect()
}

pub fn square(min: f64, max: f64) -> Series {
    Series::new(vec![
        Point::new(min, min),
        Point::new(max, min),
        Point::new(max, max),
        Point::new(min, max),
    ])
}

pub fn indexed(mut series: Series) -> Series {
    series.build_tree();
    series
}
