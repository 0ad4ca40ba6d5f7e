//! # Shape Grouping
//!
//! Rebuilds outer/hole structure from a flat kernel path list.
//!
//! Kernel output lists every outer boundary (counter-clockwise) directly
//! followed by its holes (clockwise). Grouping walks the list once:
//!
//! - the first path always opens a group
//! - a clockwise path joins the current group as a hole
//! - a counter-clockwise path opens a new group
//!
//! No containment tests are made; the ordering is trusted.

use crate::debug;
use crate::kernel::GeometricKernel;
use crate::types::{PathSet, ShapeGroup};
use config::constants::DEBUG_PATH_COUNTS;

/// Splits a flat kernel result into shape groups.
///
/// # Examples
/// ```
/// use shape_ops::group::group;
/// use shape_ops::kernel::OverlayKernel;
/// use shape_ops::IntPoint;
///
/// let outer = vec![IntPoint::new(0, 0), IntPoint::new(9, 0), IntPoint::new(9, 9), IntPoint::new(0, 9)];
/// let hole = vec![IntPoint::new(3, 3), IntPoint::new(3, 6), IntPoint::new(6, 6), IntPoint::new(6, 3)];
/// let groups = group(&OverlayKernel::new(), vec![outer, hole]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].holes.len(), 1);
/// ```
pub fn group<K: GeometricKernel + ?Sized>(kernel: &K, flat: PathSet) -> Vec<ShapeGroup> {
    let mut groups: Vec<ShapeGroup> = Vec::new();

    for path in flat {
        let counter_clockwise = kernel.orientation(&path);
        match groups.last_mut() {
            Some(current) if !counter_clockwise => current.holes.push(path),
            Some(_) => groups.push(ShapeGroup::new(path)),
            None => {
                if !counter_clockwise {
                    tracing::warn!(points = path.len(), "first result path is clockwise; treating it as an outer");
                }
                groups.push(ShapeGroup::new(path));
            }
        }
    }

    if debug::enabled(DEBUG_PATH_COUNTS) {
        let holes: usize = groups.iter().map(|g| g.holes.len()).sum();
        tracing::debug!(groups = groups.len(), holes, "grouped kernel output");
    }
    groups
}

/// Forces the first path counter-clockwise and every other path clockwise.
///
/// Paths are reversed in place; no other change is made. Degenerate paths
/// count as clockwise, so a degenerate first path is reversed.
pub fn fix_orientation<K: GeometricKernel + ?Sized>(kernel: &K, paths: &mut PathSet) {
    let mut reversed = 0usize;
    for (index, path) in paths.iter_mut().enumerate() {
        let counter_clockwise = kernel.orientation(path);
        let wanted = index == 0;
        if counter_clockwise != wanted {
            path.reverse();
            reversed += 1;
        }
    }

    if debug::enabled(DEBUG_PATH_COUNTS) {
        tracing::debug!(paths = paths.len(), reversed, "fixed orientation");
    }
}

#[cfg(test)]
mod tests;
