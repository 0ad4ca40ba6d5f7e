//! Production kernel built on `i_overlay`.
//!
//! Boolean and simplify requests go straight to the overlay engine's integer
//! API. Offsets run the in-crate offsetter and resolve its raw outline with a
//! positive fill union. Each overlay shape is re-oriented on the way out so
//! callers always see a counter-clockwise outer followed by clockwise holes.
//!
//! The engine works on `i32` points. Inputs are shifted so their bounding box
//! is centred on the origin; a box wider than the exact grid is rejected with
//! [`KernelError::OutOfRange`] rather than rescaled.

use super::clean::clean_path;
use super::geometry::{doubled_area, is_counter_clockwise};
use super::offset::raw_offset;
use super::{GeometricKernel, KernelError, KernelResult, OffsetRequest};
use crate::types::{ClipKind, FillRule, IntPoint, Path, PathSet};
use config::constants::MIN_PATH_POINTS;
use i_overlay::core::fill_rule::FillRule as OverlayFill;
use i_overlay::core::overlay::Overlay;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::i_float::int::point::IntPoint as GridPoint;
use i_overlay::i_shape::int::shape::{IntContour, IntShapes};

/// Largest distance from the grid origin the engine handles exactly.
///
/// Matches the range `i_overlay` normalises float input into.
pub const GRID_REACH: i64 = 1 << 30;

/// Kernel backed by the `i_overlay` boolean engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayKernel;

impl OverlayKernel {
    /// Creates the kernel.
    pub const fn new() -> Self {
        Self
    }

    fn overlay(
        &self,
        subjects: &PathSet,
        clips: &PathSet,
        rule: OverlayRule,
        fill: FillRule,
    ) -> KernelResult<PathSet> {
        if subjects.is_empty() && clips.is_empty() {
            return Ok(Vec::new());
        }
        let grid = Grid::fit(subjects, clips)?;
        let overlay = Overlay::with_contours(&grid.contours(subjects), &grid.contours(clips));
        let shapes = overlay.overlay(rule, overlay_fill(fill));
        Ok(grid.flatten(shapes))
    }
}

impl GeometricKernel for OverlayKernel {
    fn orientation(&self, path: &[IntPoint]) -> bool {
        is_counter_clockwise(path)
    }

    fn boolean(
        &self,
        subjects: &PathSet,
        clips: &PathSet,
        kind: ClipKind,
        fill: FillRule,
    ) -> KernelResult<PathSet> {
        let rule = match kind {
            ClipKind::Intersection => OverlayRule::Intersect,
            ClipKind::Union => OverlayRule::Union,
            ClipKind::Difference => OverlayRule::Difference,
            ClipKind::Xor => OverlayRule::Xor,
        };
        self.overlay(subjects, clips, rule, fill)
    }

    fn offset(&self, paths: &PathSet, request: &OffsetRequest) -> KernelResult<PathSet> {
        let outline = raw_offset(paths, request);
        self.overlay(&outline, &Vec::new(), OverlayRule::Union, FillRule::Positive)
    }

    fn clean(&self, path: &Path, distance: f64) -> Path {
        clean_path(path, distance)
    }

    fn simplify(&self, paths: &PathSet, fill: FillRule) -> KernelResult<PathSet> {
        self.overlay(paths, &Vec::new(), OverlayRule::Subject, fill)
    }
}

fn overlay_fill(fill: FillRule) -> OverlayFill {
    match fill {
        FillRule::NonZero => OverlayFill::NonZero,
        FillRule::Positive => OverlayFill::Positive,
    }
}

/// Translation between kernel points and the engine's `i32` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grid {
    origin: IntPoint,
}

impl Grid {
    /// Centres the grid on the bounding box of every input point.
    fn fit(subjects: &PathSet, clips: &PathSet) -> KernelResult<Self> {
        let mut points = subjects.iter().chain(clips).flatten();
        let Some(&first) = points.next() else {
            return Ok(Self {
                origin: IntPoint::new(0, 0),
            });
        };

        let (mut min, mut max) = (first, first);
        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        let origin = IntPoint::new(midpoint(min.x, max.x), midpoint(min.y, max.y));
        let reach = [
            i128::from(max.x) - i128::from(origin.x),
            i128::from(origin.x) - i128::from(min.x),
            i128::from(max.y) - i128::from(origin.y),
            i128::from(origin.y) - i128::from(min.y),
        ]
        .into_iter()
        .max()
        .unwrap_or_default();

        if reach >= i128::from(GRID_REACH) {
            let extent = (i128::from(max.x) - i128::from(min.x)).max(i128::from(max.y) - i128::from(min.y));
            return Err(KernelError::OutOfRange {
                extent,
                limit: 2 * GRID_REACH,
            });
        }
        Ok(Self { origin })
    }

    /// Every point lies within `GRID_REACH` of the origin once `fit` succeeded.
    fn contours(&self, paths: &PathSet) -> Vec<IntContour> {
        paths
            .iter()
            .map(|path| {
                path.iter()
                    .map(|p| GridPoint::new((p.x - self.origin.x) as i32, (p.y - self.origin.y) as i32))
                    .collect()
            })
            .collect()
    }

    fn point(&self, p: GridPoint) -> IntPoint {
        IntPoint::new(
            self.origin.x.saturating_add(i64::from(p.x)),
            self.origin.y.saturating_add(i64::from(p.y)),
        )
    }

    /// Flattens overlay shapes into outer-then-holes order.
    fn flatten(&self, shapes: IntShapes) -> PathSet {
        let mut out = PathSet::new();
        for shape in shapes {
            let mut contours = shape
                .into_iter()
                .map(|contour| contour.into_iter().map(|p| self.point(p)).collect::<Path>())
                .filter(|path| path.len() >= MIN_PATH_POINTS && doubled_area(path) != 0);

            let Some(mut outer) = contours.next() else {
                continue;
            };
            if !is_counter_clockwise(&outer) {
                outer.reverse();
            }
            out.push(outer);

            for mut hole in contours {
                if is_counter_clockwise(&hole) {
                    hole.reverse();
                }
                out.push(hole);
            }
        }
        out
    }
}

fn midpoint(a: i64, b: i64) -> i64 {
    ((i128::from(a) + i128::from(b)) / 2) as i64
}
