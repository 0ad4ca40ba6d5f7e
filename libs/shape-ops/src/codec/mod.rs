//! # Coordinate Codec
//!
//! Converts between caller coordinates and kernel fixed-point integers.
//!
//! In `double` mode values are multiplied by the scale factor and rounded
//! half away from zero; in `integer` mode they are taken as kernel units
//! already. Decoding is the inverse, so a `double` round trip is exact to
//! within half a kernel unit (`0.5 / scale`).

use crate::debug;
use crate::types::{CoordinateMode, IntPoint, Path, PathSet, Point, Shape};
use config::constants::{DEBUG_PATHS, DEBUG_POINTS, MIN_PATH_POINTS, SCALE_FACTOR};

/// Fixed-point converter bound to one scale factor.
///
/// # Examples
/// ```
/// use shape_ops::{CoordinateCodec, CoordinateMode};
/// let codec = CoordinateCodec::default();
/// assert_eq!(codec.encode(1.25, CoordinateMode::Double), 1_250_000);
/// assert_eq!(codec.encode(42.0, CoordinateMode::Integer), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateCodec {
    scale: f64,
}

impl Default for CoordinateCodec {
    fn default() -> Self {
        Self::new(SCALE_FACTOR)
    }
}

impl CoordinateCodec {
    /// Creates a codec for a scale factor. The factor is assumed validated.
    #[must_use]
    pub const fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// The scale factor applied in `double` mode.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts one caller value to kernel units.
    ///
    /// Out of range values saturate at the `i64` bounds; NaN encodes to 0.
    #[must_use]
    pub fn encode(&self, value: f64, mode: CoordinateMode) -> i64 {
        let scaled = match mode {
            CoordinateMode::Double => value * self.scale,
            CoordinateMode::Integer => value,
        };
        scaled.round() as i64
    }

    /// Converts one kernel value back to caller units.
    #[must_use]
    pub fn decode(&self, value: i64, mode: CoordinateMode) -> f64 {
        match mode {
            CoordinateMode::Double => value as f64 / self.scale,
            CoordinateMode::Integer => value as f64,
        }
    }

    /// Converts a caller point to kernel units.
    #[must_use]
    pub fn encode_point(&self, point: Point, mode: CoordinateMode) -> IntPoint {
        let encoded = IntPoint::new(self.encode(point.x, mode), self.encode(point.y, mode));
        if debug::enabled(DEBUG_POINTS) {
            tracing::trace!(x = point.x, y = point.y, kx = encoded.x, ky = encoded.y, "encode point");
        }
        encoded
    }

    /// Converts a kernel point back to caller units.
    #[must_use]
    pub fn decode_point(&self, point: IntPoint, mode: CoordinateMode) -> Point {
        let decoded = Point::new(self.decode(point.x, mode), self.decode(point.y, mode));
        if debug::enabled(DEBUG_POINTS) {
            tracing::trace!(kx = point.x, ky = point.y, x = decoded.x, y = decoded.y, "decode point");
        }
        decoded
    }

    /// Encodes every usable path; paths shorter than three points are skipped.
    #[must_use]
    pub fn encode_shapes(&self, shapes: &[Shape], mode: CoordinateMode) -> PathSet {
        shapes
            .iter()
            .filter(|shape| shape.len() >= MIN_PATH_POINTS)
            .map(|shape| {
                shape
                    .iter()
                    .map(|&point| self.encode_point(point, mode))
                    .collect()
            })
            .collect()
    }

    /// Decodes kernel output, dropping paths shorter than three points.
    #[must_use]
    pub fn decode_paths(&self, paths: &[Path], mode: CoordinateMode) -> Vec<Shape> {
        paths
            .iter()
            .filter(|path| path.len() >= MIN_PATH_POINTS)
            .map(|path| self.decode_path(path, mode))
            .collect()
    }

    /// Decodes a single path without length filtering.
    #[must_use]
    pub fn decode_path(&self, path: &[IntPoint], mode: CoordinateMode) -> Shape {
        if debug::enabled(DEBUG_PATHS) {
            tracing::debug!(points = path.len(), "decode path");
        }
        path.iter()
            .map(|&point| self.decode_point(point, mode))
            .collect()
    }
}

#[cfg(test)]
mod tests;
