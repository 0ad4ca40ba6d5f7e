//! Exact integer measures on kernel paths.

use crate::types::IntPoint;
use glam::DVec2;

/// Twice the signed area of a closed path, computed exactly.
///
/// Positive for counter-clockwise winding in a y-up frame.
///
/// # Examples
/// ```
/// use shape_ops::kernel::geometry::doubled_area;
/// use shape_ops::IntPoint;
/// let square = [
///     IntPoint::new(0, 0),
///     IntPoint::new(2, 0),
///     IntPoint::new(2, 2),
///     IntPoint::new(0, 2),
/// ];
/// assert_eq!(doubled_area(&square), 8);
/// ```
pub fn doubled_area(path: &[IntPoint]) -> i128 {
    if path.len() < 3 {
        return 0;
    }
    let mut sum: i128 = 0;
    let mut previous = path[path.len() - 1];
    for &point in path {
        sum += i128::from(previous.x) * i128::from(point.y)
            - i128::from(point.x) * i128::from(previous.y);
        previous = point;
    }
    sum
}

/// Signed area in kernel units squared.
pub fn area(path: &[IntPoint]) -> f64 {
    doubled_area(path) as f64 / 2.0
}

/// True when the path has strictly positive area.
///
/// Degenerate (zero area) paths report `false`.
pub fn is_counter_clockwise(path: &[IntPoint]) -> bool {
    doubled_area(path) > 0
}

/// Index of the bottom-most vertex (largest `y`, then smallest `x`).
pub(crate) fn lowest_vertex(path: &[IntPoint]) -> Option<usize> {
    path.iter()
        .enumerate()
        .reduce(|best, candidate| {
            let (_, b) = best;
            let (_, c) = candidate;
            if c.y > b.y || (c.y == b.y && c.x < b.x) {
                candidate
            } else {
                best
            }
        })
        .map(|(index, _)| index)
}

#[inline]
pub(crate) fn to_dvec(point: IntPoint) -> DVec2 {
    DVec2::new(point.x as f64, point.y as f64)
}

#[inline]
pub(crate) fn round_point(point: DVec2) -> IntPoint {
    IntPoint::new(point.x.round() as i64, point.y.round() as i64)
}
