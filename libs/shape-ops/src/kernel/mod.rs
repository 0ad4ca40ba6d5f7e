//! # Geometric Kernel
//!
//! The integer polygon engine behind the façade. Every operation here works
//! on kernel units only; scaling is the codec's job.
//!
//! [`GeometricKernel`] is the seam: the façade is generic over it, and
//! [`OverlayKernel`] is the production implementation.
//!
//! ## Output contract
//!
//! Boolean, simplify and offset results list each outer boundary
//! counter-clockwise, immediately followed by its clockwise holes. The
//! shape grouper relies on this ordering.

pub mod clean;
pub mod geometry;
pub mod offset;
mod overlay;

pub use overlay::{OverlayKernel, GRID_REACH};

use crate::types::{ClipKind, EndStyle, FillRule, IntPoint, JoinStyle, Path, PathSet};

/// Offset request in kernel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRequest {
    /// Signed distance (positive grows closed polygons)
    pub delta: f64,
    /// Corner treatment
    pub join: JoinStyle,
    /// Miter limit as a multiple of `delta`
    pub miter_limit: f64,
    /// Closed polygons or open butt-ended lines
    pub end: EndStyle,
    /// Maximum deviation of round joins from the true arc
    pub arc_tolerance: f64,
}

/// Failure reported by a kernel instead of a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// Input spans more kernel units than the engine computes on exactly.
    #[error("coordinates span {extent} kernel units, exact range is below {limit}")]
    OutOfRange {
        /// Largest bounding box side of the input
        extent: i128,
        /// Exclusive upper bound on that side
        limit: i64,
    },
}

/// Result of a fallible kernel call.
pub type KernelResult<T> = Result<T, KernelError>;

/// Integer polygon operations the façade delegates to.
///
/// Fallible calls return a [`KernelError`]; implementations may also panic
/// on internal faults, which the façade catches. Both surface as
/// [`crate::ClipError::Kernel`].
pub trait GeometricKernel {
    /// True when the path winds counter-clockwise (positive signed area).
    fn orientation(&self, path: &[IntPoint]) -> bool;

    /// Boolean combination of subject and clip paths.
    fn boolean(&self, subjects: &PathSet, clips: &PathSet, kind: ClipKind, fill: FillRule) -> KernelResult<PathSet>;

    /// Grows or shrinks paths by `request.delta`.
    fn offset(&self, paths: &PathSet, request: &OffsetRequest) -> KernelResult<PathSet>;

    /// Removes vertices closer than `distance` to a neighbour or its chord.
    fn clean(&self, path: &Path, distance: f64) -> Path;

    /// Resolves self-intersections under `fill`.
    fn simplify(&self, paths: &PathSet, fill: FillRule) -> KernelResult<PathSet>;
}
