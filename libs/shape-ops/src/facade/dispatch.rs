//! Dynamic entry point for hosts that pass positional, loosely typed
//! arguments.

use super::ShapeOps;
use crate::error::ClipResult;
use crate::kernel::GeometricKernel;
use crate::types::{CoordinateMode, OffsetParams, Shape};
use crate::validate::{validate_collections, validate_parameters, validate_shape_collection, Arguments, Operation};
use config::constants::{DEFAULT_CLEAN_DISTANCE, DEFAULT_MITER_LIMIT};
use serde::Serialize;
use serde_json::Value;

impl<K: GeometricKernel> ShapeOps<K> {
    /// Validates `args` against the operation's signature, runs it and
    /// serializes the result.
    ///
    /// Returns `Ok(None)` when the operation produced no geometry.
    ///
    /// # Errors
    ///
    /// Argument errors are returned before any kernel call; kernel faults
    /// surface as [`crate::ClipError::Kernel`]. Every error is also logged
    /// at `warn`.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use shape_ops::{Operation, ShapeOps};
    ///
    /// let ops = ShapeOps::default();
    /// let square = json!([[{"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}, {"x": 0, "y": 10}]]);
    /// let out = ops.call(Operation::Orientation, &[square, json!("integer")]).unwrap();
    /// assert_eq!(out, Some(json!([true])));
    /// ```
    pub fn call(&self, operation: Operation, args: &[Value]) -> ClipResult<Option<Value>> {
        let result = self.dispatch(operation, args);
        if let Err(err) = &result {
            tracing::warn!(%operation, error = %err, "operation failed");
        }
        result
    }

    fn dispatch(&self, operation: Operation, args: &[Value]) -> ClipResult<Option<Value>> {
        let parsed = validate_parameters(operation, args)?;

        match operation {
            Operation::Orientation => {
                let mode = mode_at(&parsed, 1);
                to_json(self.orientation(&shapes_at(&parsed, 0), mode)?)
            }
            Operation::Offset | Operation::LineOffset => {
                let params = OffsetParams::new(mode_at(&parsed, 1), parsed.number(2).unwrap_or_default())
                    .with_join(parsed.join(3).unwrap_or_default())
                    .with_miter_limit(parsed.number(4).unwrap_or(DEFAULT_MITER_LIMIT));
                let shapes = shapes_at(&parsed, 0);
                let out = if operation == Operation::Offset {
                    self.offset(&shapes, params)?
                } else {
                    self.line_offset(&shapes, params)?
                };
                to_json(out)
            }
            Operation::Union => {
                let collections = parsed.shapes(0).map(validate_collections).unwrap_or_default();
                let mode = parsed.mode(1).unwrap_or(self.config.union_mode());
                to_json(self.union(&collections, mode)?)
            }
            Operation::Clip => {
                let mode = parsed.mode(2).unwrap_or(self.config.clip_mode());
                let kind = parsed.clip_kind(3).unwrap_or_default();
                to_json(self.clip(&shapes_at(&parsed, 0), &shapes_at(&parsed, 1), mode, kind)?)
            }
            Operation::Clean => {
                let distance = parsed.number(2).unwrap_or(DEFAULT_CLEAN_DISTANCE);
                to_json(self.clean(&shapes_at(&parsed, 0), mode_at(&parsed, 1), distance)?)
            }
            Operation::FixOrientation => {
                to_json(self.fix_orientation(&shapes_at(&parsed, 0), mode_at(&parsed, 1))?)
            }
            Operation::Simplify => to_json(self.simplify(&shapes_at(&parsed, 0), mode_at(&parsed, 1))?),
        }
    }
}

fn shapes_at(parsed: &Arguments<'_>, index: usize) -> Vec<Shape> {
    parsed
        .shapes(index)
        .map(validate_shape_collection)
        .unwrap_or_default()
}

/// Mode at a required position; anything but `double` reads as `integer`.
fn mode_at(parsed: &Arguments<'_>, index: usize) -> CoordinateMode {
    parsed.mode(index).unwrap_or(CoordinateMode::Integer)
}

fn to_json<T: Serialize>(value: Option<T>) -> ClipResult<Option<Value>> {
    Ok(value.map(serde_json::to_value).transpose()?)
}
