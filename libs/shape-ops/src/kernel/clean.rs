//! Vertex cleaning for closed paths.
//!
//! Removes vertices that lie within `distance` of an adjacent vertex, of the
//! vertex two steps away, or of the chord through their neighbours. The
//! walk repeats until every remaining vertex has been accepted once since
//! its neighbourhood last changed.

use crate::types::{IntPoint, Path};

/// Cleans a closed path; paths reduced below three vertices become empty.
///
/// # Examples
/// ```
/// use shape_ops::kernel::clean::clean_path;
/// use shape_ops::IntPoint;
///
/// let path = vec![
///     IntPoint::new(0, 0),
///     IntPoint::new(50, 1),
///     IntPoint::new(100, 0),
///     IntPoint::new(100, 100),
///     IntPoint::new(0, 100),
/// ];
/// assert_eq!(clean_path(&path, 2.0).len(), 4);
/// ```
pub fn clean_path(path: &[IntPoint], distance: f64) -> Path {
    let mut size = path.len();
    if size == 0 {
        return Vec::new();
    }

    let mut ring = Ring::new(size);
    let dist_sqrd = distance * distance;
    let mut op = 0;

    while !ring.accepted[op] && ring.next[op] != ring.prev[op] {
        let prev = ring.prev[op];
        let next = ring.next[op];
        if points_are_close(path[op], path[prev], dist_sqrd) {
            op = ring.exclude(op);
            size -= 1;
        } else if points_are_close(path[prev], path[next], dist_sqrd) {
            ring.exclude(next);
            op = ring.exclude(op);
            size -= 2;
        } else if slopes_near_collinear(path[prev], path[op], path[next], dist_sqrd) {
            op = ring.exclude(op);
            size -= 1;
        } else {
            ring.accepted[op] = true;
            op = next;
        }
    }

    if size < 3 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        out.push(path[op]);
        op = ring.next[op];
    }
    out
}

/// Doubly linked ring over vertex indices.
struct Ring {
    prev: Vec<usize>,
    next: Vec<usize>,
    accepted: Vec<bool>,
}

impl Ring {
    fn new(size: usize) -> Self {
        Self {
            prev: (0..size).map(|i| (i + size - 1) % size).collect(),
            next: (0..size).map(|i| (i + 1) % size).collect(),
            accepted: vec![false; size],
        }
    }

    /// Unlinks `op` and returns its predecessor, which must be revisited.
    fn exclude(&mut self, op: usize) -> usize {
        let prev = self.prev[op];
        let next = self.next[op];
        self.next[prev] = next;
        self.prev[next] = prev;
        self.accepted[prev] = false;
        prev
    }
}

fn points_are_close(a: IntPoint, b: IntPoint, dist_sqrd: f64) -> bool {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    dx * dx + dy * dy <= dist_sqrd
}

/// Squared distance from `pt` to the infinite line through `ln1` and `ln2`.
fn distance_from_line_sqrd(pt: IntPoint, ln1: IntPoint, ln2: IntPoint) -> f64 {
    let a = ln1.y as f64 - ln2.y as f64;
    let b = ln2.x as f64 - ln1.x as f64;
    let c = a * ln1.x as f64 + b * ln1.y as f64;
    let c = a * pt.x as f64 + b * pt.y as f64 - c;
    (c * c) / (a * a + b * b)
}

/// True when one of the three points lies within the tolerance of the line
/// through the other two. The middle point along the dominant axis is tested.
fn slopes_near_collinear(pt1: IntPoint, pt2: IntPoint, pt3: IntPoint, dist_sqrd: f64) -> bool {
    let within = |pt, ln1, ln2| distance_from_line_sqrd(pt, ln1, ln2) < dist_sqrd;
    if pt1.x.abs_diff(pt2.x) > pt1.y.abs_diff(pt2.y) {
        if (pt1.x > pt2.x) == (pt1.x < pt3.x) {
            within(pt1, pt2, pt3)
        } else if (pt2.x > pt1.x) == (pt2.x < pt3.x) {
            within(pt2, pt1, pt3)
        } else {
            within(pt3, pt1, pt2)
        }
    } else if (pt1.y > pt2.y) == (pt1.y < pt3.y) {
        within(pt1, pt2, pt3)
    } else if (pt2.y > pt1.y) == (pt2.y < pt3.y) {
        within(pt2, pt1, pt3)
    } else {
        within(pt3, pt1, pt2)
    }
}
