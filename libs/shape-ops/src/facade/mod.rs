//! # Operation Façade
//!
//! The public operations. Each one runs the same pipeline:
//!
//! ```text
//! shapes → encode (fixed-point) → kernel → decode / group → Option<result>
//! ```
//!
//! `None` means the operation produced no usable geometry; it is never an
//! error. Argument checking for dynamic hosts happens one layer up, in
//! [`ShapeOps::call`].

mod dispatch;

use crate::codec::CoordinateCodec;
use crate::debug;
use crate::error::{ClipError, ClipResult};
use crate::group;
use crate::kernel::{GeometricKernel, KernelResult, OffsetRequest, OverlayKernel};
use crate::types::{
    ClipKind, CoordinateMode, EndStyle, FillRule, OffsetParams, PathSet, Point, Shape, ShapeGroup,
};
use crate::validate::Operation;
use config::constants::{
    validate_scale, ConfigError, CLOSED_ARC_TOLERANCE_DIVISOR, DEBUG_PARAMETERS, DEBUG_PATH_COUNTS,
    OPEN_ARC_TOLERANCE, SCALE_FACTOR,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Runtime settings shared by every operation of a [`ShapeOps`].
///
/// # Examples
/// ```
/// use shape_ops::{ClipConfig, CoordinateMode};
/// let config = ClipConfig::new(1_000.0, CoordinateMode::Integer).unwrap();
/// assert_eq!(config.scale(), 1_000.0);
/// assert!(ClipConfig::new(-1.0, CoordinateMode::Double).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    scale: f64,
    union_mode: CoordinateMode,
    clip_mode: CoordinateMode,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            scale: SCALE_FACTOR,
            union_mode: CoordinateMode::Double,
            clip_mode: CoordinateMode::Integer,
        }
    }
}

impl ClipConfig {
    /// Creates a configuration with a validated scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] for non-finite or non-positive
    /// scales.
    pub fn new(scale: f64, union_mode: CoordinateMode) -> Result<Self, ConfigError> {
        Ok(Self {
            scale: validate_scale(scale)?,
            union_mode,
            ..Self::default()
        })
    }

    /// Replaces the mode `clip` uses when a host omits it.
    #[must_use]
    pub fn with_clip_mode(mut self, clip_mode: CoordinateMode) -> Self {
        self.clip_mode = clip_mode;
        self
    }

    /// Fixed-point scale factor for `double` coordinates.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mode `union` uses when a host omits it.
    pub fn union_mode(&self) -> CoordinateMode {
        self.union_mode
    }

    /// Mode `clip` uses when a host omits it.
    pub fn clip_mode(&self) -> CoordinateMode {
        self.clip_mode
    }
}

// =============================================================================
// FAÇADE
// =============================================================================

/// Polygon operations over a geometric kernel.
///
/// # Examples
/// ```
/// use shape_ops::{CoordinateMode, Point, ShapeOps};
///
/// let ops = ShapeOps::default();
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let winding = ops.orientation(&[square], CoordinateMode::Double).unwrap();
/// assert_eq!(winding, Some(vec![true]));
/// ```
#[derive(Debug, Clone)]
pub struct ShapeOps<K = OverlayKernel> {
    config: ClipConfig,
    codec: CoordinateCodec,
    kernel: K,
}

impl Default for ShapeOps<OverlayKernel> {
    fn default() -> Self {
        Self::new(ClipConfig::default())
    }
}

impl ShapeOps<OverlayKernel> {
    /// Façade over the production kernel.
    pub fn new(config: ClipConfig) -> Self {
        Self::with_kernel(config, OverlayKernel::new())
    }
}

impl<K: GeometricKernel> ShapeOps<K> {
    /// Façade over a caller supplied kernel.
    pub fn with_kernel(config: ClipConfig, kernel: K) -> Self {
        Self {
            config,
            codec: CoordinateCodec::new(config.scale()),
            kernel,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Coordinate codec bound to the configured scale.
    pub fn codec(&self) -> &CoordinateCodec {
        &self.codec
    }

    /// The underlying kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Winding of every usable path, in input order.
    ///
    /// Paths shorter than three points are not reported.
    pub fn orientation(&self, shapes: &[Shape], mode: CoordinateMode) -> ClipResult<Option<Vec<bool>>> {
        let paths = self.codec.encode_shapes(shapes, mode);
        let windings: Vec<bool> = self.guarded(Operation::Orientation, |kernel| {
            paths.iter().map(|path| kernel.orientation(path)).collect()
        })?;
        Ok(non_empty(windings))
    }

    /// Offsets closed polygons.
    ///
    /// In `double` mode the delta is scaled like a coordinate. Round joins
    /// use an arc tolerance of `scale / 10` kernel units.
    pub fn offset(&self, shapes: &[Shape], params: OffsetParams) -> ClipResult<Option<Vec<Shape>>> {
        let arc_tolerance = self.config.scale() / CLOSED_ARC_TOLERANCE_DIVISOR;
        self.run_offset(Operation::Offset, shapes, params, EndStyle::ClosedPolygon, arc_tolerance)
    }

    /// Offsets open lines with flat ends.
    ///
    /// The arc tolerance is a fixed 0.25 kernel units in both modes.
    pub fn line_offset(&self, shapes: &[Shape], params: OffsetParams) -> ClipResult<Option<Vec<Shape>>> {
        self.run_offset(Operation::LineOffset, shapes, params, EndStyle::OpenButt, OPEN_ARC_TOLERANCE)
    }

    fn run_offset(
        &self,
        operation: Operation,
        shapes: &[Shape],
        params: OffsetParams,
        end: EndStyle,
        arc_tolerance: f64,
    ) -> ClipResult<Option<Vec<Shape>>> {
        let request = OffsetRequest {
            delta: self.codec.encode(params.delta, params.mode) as f64,
            join: params.join,
            miter_limit: params.miter_limit,
            end,
            arc_tolerance,
        };
        if debug::enabled(DEBUG_PARAMETERS) {
            tracing::debug!(
                %operation,
                delta = request.delta,
                join = %request.join,
                miter_limit = request.miter_limit,
                arc_tolerance,
                "offset parameters"
            );
        }

        let paths = self.codec.encode_shapes(shapes, params.mode);
        let out = self.kernel_call(operation, &paths, |kernel| kernel.offset(&paths, &request))?;
        Ok(self.decode(&out, params.mode))
    }

    /// Unions every path of every collection into shape groups.
    pub fn union(
        &self,
        collections: &[Vec<Shape>],
        mode: CoordinateMode,
    ) -> ClipResult<Option<Vec<ShapeGroup<Point>>>> {
        let subjects: PathSet = collections
            .iter()
            .flat_map(|shapes| self.codec.encode_shapes(shapes, mode))
            .collect();
        let out = self.kernel_call(Operation::Union, &subjects, |kernel| {
            kernel.boolean(&subjects, &PathSet::new(), ClipKind::Union, FillRule::NonZero)
        })?;
        Ok(self.decode_groups(out, mode))
    }

    /// Boolean combination of a subject and a clip collection.
    pub fn clip(
        &self,
        subject: &[Shape],
        clip: &[Shape],
        mode: CoordinateMode,
        kind: ClipKind,
    ) -> ClipResult<Option<Vec<ShapeGroup<Point>>>> {
        if debug::enabled(DEBUG_PARAMETERS) {
            tracing::debug!(%kind, %mode, "clip parameters");
        }
        let subjects = self.codec.encode_shapes(subject, mode);
        let clips = self.codec.encode_shapes(clip, mode);
        let out = self.kernel_call(Operation::Clip, &subjects, |kernel| {
            kernel.boolean(&subjects, &clips, kind, FillRule::NonZero)
        })?;
        Ok(self.decode_groups(out, mode))
    }

    /// Removes vertices closer than `distance` kernel units to a neighbour.
    ///
    /// `distance` is not scaled, even in `double` mode. Paths that collapse
    /// are dropped.
    pub fn clean(&self, shapes: &[Shape], mode: CoordinateMode, distance: f64) -> ClipResult<Option<Vec<Shape>>> {
        if debug::enabled(DEBUG_PARAMETERS) {
            tracing::debug!(distance, "clean parameters");
        }
        let paths = self.codec.encode_shapes(shapes, mode);
        let out = self.kernel_call(Operation::Clean, &paths, |kernel| {
            Ok(paths
                .iter()
                .map(|path| kernel.clean(path, distance))
                .filter(|path| !path.is_empty())
                .collect())
        })?;
        Ok(self.decode(&out, mode))
    }

    /// Removes self-intersections under the non-zero fill rule.
    pub fn simplify(&self, shapes: &[Shape], mode: CoordinateMode) -> ClipResult<Option<Vec<Shape>>> {
        let paths = self.codec.encode_shapes(shapes, mode);
        let out = self.kernel_call(Operation::Simplify, &paths, |kernel| {
            kernel.simplify(&paths, FillRule::NonZero)
        })?;
        Ok(self.decode(&out, mode))
    }

    /// Makes the first path counter-clockwise and every other path clockwise.
    pub fn fix_orientation(&self, shapes: &[Shape], mode: CoordinateMode) -> ClipResult<Option<Vec<Shape>>> {
        let mut paths = self.codec.encode_shapes(shapes, mode);
        self.guarded(Operation::FixOrientation, |kernel| {
            group::fix_orientation(kernel, &mut paths);
        })?;
        Ok(self.decode(&paths, mode))
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Runs a kernel call with path-count logging around it.
    fn kernel_call(
        &self,
        operation: Operation,
        input: &PathSet,
        run: impl FnOnce(&K) -> KernelResult<PathSet>,
    ) -> ClipResult<PathSet> {
        if debug::enabled(DEBUG_PATH_COUNTS) {
            tracing::debug!(%operation, paths = input.len(), "before kernel");
        }
        let out = self.guarded(operation, run)?.map_err(|err| {
            tracing::warn!(%operation, error = %err, "kernel rejected input");
            ClipError::Kernel {
                operation: operation.name(),
                message: err.to_string(),
            }
        })?;
        if debug::enabled(DEBUG_PATH_COUNTS) {
            tracing::debug!(%operation, paths = out.len(), "after kernel");
        }
        Ok(out)
    }

    /// Converts a kernel panic into [`ClipError::Kernel`].
    fn guarded<T>(&self, operation: Operation, run: impl FnOnce(&K) -> T) -> ClipResult<T> {
        panic::catch_unwind(AssertUnwindSafe(|| run(&self.kernel))).map_err(|payload| {
            let message = panic_message(payload.as_ref());
            tracing::warn!(%operation, %message, "kernel fault");
            ClipError::Kernel {
                operation: operation.name(),
                message,
            }
        })
    }

    fn decode(&self, paths: &PathSet, mode: CoordinateMode) -> Option<Vec<Shape>> {
        non_empty(self.codec.decode_paths(paths, mode))
    }

    fn decode_groups(&self, flat: PathSet, mode: CoordinateMode) -> Option<Vec<ShapeGroup<Point>>> {
        let groups = group::group(&self.kernel, flat)
            .iter()
            .map(|g| g.map_paths(|path| self.codec.decode_path(path, mode)))
            .collect();
        non_empty(groups)
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown kernel panic".to_string()
    }
}
