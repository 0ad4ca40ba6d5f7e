//! # Path Offsetting
//!
//! Produces the raw offset outline of closed polygons or open lines in
//! kernel units. The raw outline may self-overlap; callers union it with the
//! positive fill rule to get the final region.
//!
//! ## Algorithm Overview
//!
//! 1. Normalize input: drop repeated vertices, discard closed paths with
//!    fewer than three distinct vertices
//! 2. Make the polygon holding the bottom-most vertex counter-clockwise,
//!    reversing every closed path if needed
//! 3. Walk each path with unit edge normals, emitting join geometry at
//!    every vertex (miter, square or round)
//! 4. Open lines are walked forward then backward and capped flat at both
//!    ends
//!
//! Concave corners emit the vertex itself between the two offset points;
//! the union pass removes the resulting loop.

use super::geometry::{doubled_area, lowest_vertex, round_point, to_dvec};
use super::OffsetRequest;
use crate::types::{EndStyle, IntPoint, JoinStyle, Path, PathSet};
use config::constants::{ARC_TOLERANCE_DELTA_RATIO, OPEN_ARC_TOLERANCE};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Deltas smaller than this leave closed polygons untouched.
const NEAR_ZERO: f64 = 1.0e-20;

/// Computes the raw offset outline of every path.
///
/// # Examples
/// ```
/// use shape_ops::kernel::offset::raw_offset;
/// use shape_ops::kernel::OffsetRequest;
/// use shape_ops::{EndStyle, IntPoint, JoinStyle};
///
/// let square = vec![vec![
///     IntPoint::new(0, 0),
///     IntPoint::new(10, 0),
///     IntPoint::new(10, 10),
///     IntPoint::new(0, 10),
/// ]];
/// let request = OffsetRequest {
///     delta: 2.0,
///     join: JoinStyle::Miter,
///     miter_limit: 2.0,
///     end: EndStyle::ClosedPolygon,
///     arc_tolerance: 0.25,
/// };
/// let grown = raw_offset(&square, &request);
/// assert_eq!(grown[0][0], IntPoint::new(-2, -2));
/// ```
pub fn raw_offset(paths: &PathSet, request: &OffsetRequest) -> PathSet {
    let mut contours: Vec<Path> = paths
        .iter()
        .filter_map(|path| normalize(path, request.end))
        .collect();

    if request.end == EndStyle::ClosedPolygon {
        fix_orientations(&mut contours);
    }

    if request.delta.abs() < NEAR_ZERO {
        return match request.end {
            EndStyle::ClosedPolygon => contours,
            EndStyle::OpenButt => Vec::new(),
        };
    }

    let offsetter = Offsetter::new(request);
    contours
        .iter()
        .filter_map(|contour| offsetter.offset_contour(contour))
        .collect()
}

/// Removes a closing duplicate and consecutive repeats.
fn normalize(path: &Path, end: EndStyle) -> Option<Path> {
    let mut last = path.len().checked_sub(1)?;
    if end == EndStyle::ClosedPolygon {
        while last > 0 && path[0] == path[last] {
            last -= 1;
        }
    }

    let mut contour: Path = Vec::with_capacity(last + 1);
    for &point in &path[..=last] {
        if contour.last() != Some(&point) {
            contour.push(point);
        }
    }

    if end == EndStyle::ClosedPolygon && contour.len() < 3 {
        return None;
    }
    Some(contour)
}

/// Reverses every contour when the one owning the bottom-most vertex is clockwise.
fn fix_orientations(contours: &mut [Path]) {
    let mut lowest: Option<(usize, IntPoint)> = None;
    for (index, contour) in contours.iter().enumerate() {
        let Some(vertex) = lowest_vertex(contour).map(|i| contour[i]) else {
            continue;
        };
        let lower = match lowest {
            None => true,
            Some((_, best)) => vertex.y > best.y || (vertex.y == best.y && vertex.x < best.x),
        };
        if lower {
            lowest = Some((index, vertex));
        }
    }

    if let Some((index, _)) = lowest {
        if doubled_area(&contours[index]) < 0 {
            for contour in contours.iter_mut() {
                contour.reverse();
            }
        }
    }
}

/// Unit normal of the edge `from -> to`, pointing right of travel.
fn unit_normal(from: IntPoint, to: IntPoint) -> DVec2 {
    if from == to {
        return DVec2::ZERO;
    }
    let edge = (to_dvec(to) - to_dvec(from)).normalize();
    DVec2::new(edge.y, -edge.x)
}

// =============================================================================
// OFFSETTER
// =============================================================================

/// Per-call constants derived from the request.
struct Offsetter {
    delta: f64,
    join: JoinStyle,
    end: EndStyle,
    miter_lim: f64,
    sin: f64,
    cos: f64,
    steps_per_rad: f64,
    circle_steps: f64,
}

impl Offsetter {
    fn new(request: &OffsetRequest) -> Self {
        let delta = request.delta;
        let abs_delta = delta.abs();

        let miter_lim = if request.miter_limit > 2.0 {
            2.0 / (request.miter_limit * request.miter_limit)
        } else {
            0.5
        };

        let tolerance = if request.arc_tolerance <= 0.0 {
            OPEN_ARC_TOLERANCE
        } else if request.arc_tolerance > abs_delta * ARC_TOLERANCE_DELTA_RATIO {
            abs_delta * ARC_TOLERANCE_DELTA_RATIO
        } else {
            request.arc_tolerance
        };

        let mut steps = PI / (1.0 - tolerance / abs_delta).acos();
        if !steps.is_finite() || steps > abs_delta * PI {
            steps = abs_delta * PI;
        }
        let mut sin = (TAU / steps).sin();
        if delta < 0.0 {
            sin = -sin;
        }

        Self {
            delta,
            join: request.join,
            end: request.end,
            miter_lim,
            sin,
            cos: (TAU / steps).cos(),
            steps_per_rad: steps / TAU,
            circle_steps: steps,
        }
    }

    fn offset_contour(&self, src: &[IntPoint]) -> Option<Path> {
        let len = src.len();
        if len == 0 || (self.delta <= 0.0 && (len < 3 || self.end != EndStyle::ClosedPolygon)) {
            return None;
        }

        if len == 1 {
            return Some(self.dot(src[0]));
        }

        let mut normals: Vec<DVec2> = src.windows(2).map(|pair| unit_normal(pair[0], pair[1])).collect();
        match self.end {
            EndStyle::ClosedPolygon => normals.push(unit_normal(src[len - 1], src[0])),
            EndStyle::OpenButt => normals.push(normals[len - 2]),
        }

        let mut walk = Walk {
            offsetter: self,
            src,
            normals,
            out: Vec::with_capacity(len * 2),
            sin_a: 0.0,
        };

        match self.end {
            EndStyle::ClosedPolygon => {
                let mut k = len - 1;
                for j in 0..len {
                    walk.offset_point(j, &mut k);
                }
            }
            EndStyle::OpenButt => walk.open_butt(),
        }

        Some(walk.out)
    }

    /// Outline of a single point: a circle for round joins, a square otherwise.
    fn dot(&self, center: IntPoint) -> Path {
        let origin = to_dvec(center);
        let mut out = Vec::new();
        match self.join {
            JoinStyle::Round => {
                let mut direction = DVec2::X;
                let mut step = 1.0;
                while step <= self.circle_steps {
                    out.push(round_point(origin + direction * self.delta));
                    direction = self.rotate(direction);
                    step += 1.0;
                }
            }
            JoinStyle::Miter | JoinStyle::Square => {
                for corner in [
                    DVec2::new(-1.0, -1.0),
                    DVec2::new(1.0, -1.0),
                    DVec2::new(1.0, 1.0),
                    DVec2::new(-1.0, 1.0),
                ] {
                    out.push(round_point(origin + corner * self.delta));
                }
            }
        }
        out
    }

    #[inline]
    fn rotate(&self, v: DVec2) -> DVec2 {
        DVec2::new(v.x * self.cos - self.sin * v.y, v.x * self.sin + v.y * self.cos)
    }
}

/// State of one contour walk.
struct Walk<'a> {
    offsetter: &'a Offsetter,
    src: &'a [IntPoint],
    normals: Vec<DVec2>,
    out: Path,
    sin_a: f64,
}

impl Walk<'_> {
    fn at(&self, j: usize, normal: DVec2) -> IntPoint {
        round_point(to_dvec(self.src[j]) + normal * self.offsetter.delta)
    }

    fn open_butt(&mut self) {
        let len = self.src.len();
        let last_normal = self.normals[len - 1];

        let mut k = 0;
        for j in 1..len - 1 {
            self.offset_point(j, &mut k);
        }
        let end = len - 1;
        self.out.push(self.at(end, last_normal));
        self.out.push(self.at(end, -last_normal));

        for j in (1..len).rev() {
            self.normals[j] = -self.normals[j - 1];
        }
        self.normals[0] = -self.normals[1];

        let mut k = len - 1;
        for j in (1..len - 1).rev() {
            self.offset_point(j, &mut k);
        }
        let first = self.normals[0];
        self.out.push(self.at(0, -first));
        self.out.push(self.at(0, first));
    }

    /// Emits the join geometry at vertex `j` whose incoming edge normal is `k`.
    fn offset_point(&mut self, j: usize, k: &mut usize) {
        let delta = self.offsetter.delta;
        let nj = self.normals[j];
        let nk = self.normals[*k];

        self.sin_a = nk.perp_dot(nj);
        if (self.sin_a * delta).abs() < 1.0 {
            if nk.dot(nj) > 0.0 {
                self.out.push(self.at(j, nk));
                return;
            }
        } else {
            self.sin_a = self.sin_a.clamp(-1.0, 1.0);
        }

        if self.sin_a * delta < 0.0 {
            self.out.push(self.at(j, nk));
            self.out.push(self.src[j]);
            self.out.push(self.at(j, nj));
        } else {
            match self.offsetter.join {
                JoinStyle::Miter => {
                    let r = 1.0 + nj.dot(nk);
                    if r >= self.offsetter.miter_lim {
                        self.miter(j, *k, r);
                    } else {
                        self.square(j, *k);
                    }
                }
                JoinStyle::Square => self.square(j, *k),
                JoinStyle::Round => self.round(j, *k),
            }
        }
        *k = j;
    }

    fn square(&mut self, j: usize, k: usize) {
        let delta = self.offsetter.delta;
        let (nj, nk) = (self.normals[j], self.normals[k]);
        let dx = (self.sin_a.atan2(nk.dot(nj)) / 4.0).tan();
        let origin = to_dvec(self.src[j]);
        self.out.push(round_point(
            origin + DVec2::new(nk.x - nk.y * dx, nk.y + nk.x * dx) * delta,
        ));
        self.out.push(round_point(
            origin + DVec2::new(nj.x + nj.y * dx, nj.y - nj.x * dx) * delta,
        ));
    }

    fn miter(&mut self, j: usize, k: usize, r: f64) {
        let q = self.offsetter.delta / r;
        let point = to_dvec(self.src[j]) + (self.normals[k] + self.normals[j]) * q;
        self.out.push(round_point(point));
    }

    fn round(&mut self, j: usize, k: usize) {
        let (nj, nk) = (self.normals[j], self.normals[k]);
        let angle = self.sin_a.atan2(nk.dot(nj));
        let steps = ((self.offsetter.steps_per_rad * angle.abs()).round() as usize).max(1);

        let mut direction = nk;
        for _ in 0..steps {
            self.out.push(self.at(j, direction));
            direction = self.offsetter.rotate(direction);
        }
        self.out.push(self.at(j, nj));
    }
}
