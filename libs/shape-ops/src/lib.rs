//! # Shape Ops
//!
//! Boolean, offset, clean, simplify and orientation operations over 2D
//! polygon paths, for hosts that speak in loosely typed point lists.
//!
//! ## Architecture
//!
//! ```text
//! host args → validate → codec (fixed-point) → kernel → codec / group → result
//! ```
//!
//! - **validate**: per-operation argument signatures, lenient shape reading
//! - **codec**: `double` ⇄ kernel integer units (scale 1,000,000 by default)
//! - **kernel**: `GeometricKernel` seam; `OverlayKernel` is backed by
//!   `i_overlay` plus an in-crate offsetter and cleaner
//! - **group**: outer/hole regrouping from output winding
//! - **facade**: `ShapeOps`, the typed operations and the dynamic `call`
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use shape_ops::{Operation, ShapeOps};
//!
//! let ops = ShapeOps::default();
//! let a = json!([[{"x": 0, "y": 0}, {"x": 2, "y": 0}, {"x": 2, "y": 2}, {"x": 0, "y": 2}]]);
//! let b = json!([[{"x": 1, "y": 1}, {"x": 3, "y": 1}, {"x": 3, "y": 3}, {"x": 1, "y": 3}]]);
//! let groups = ops
//!     .call(Operation::Clip, &[a, b, json!("double"), json!("ctIntersection")])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(groups.as_array().map(Vec::len), Some(1));
//! ```

pub mod codec;
pub mod debug;
pub mod error;
pub mod facade;
pub mod group;
pub mod kernel;
pub mod types;
pub mod validate;

pub use codec::CoordinateCodec;
pub use error::{ClipError, ClipResult};
pub use facade::{ClipConfig, ShapeOps};
pub use kernel::{GeometricKernel, KernelError, KernelResult, OverlayKernel};
pub use types::{
    ClipKind, CoordinateMode, EndStyle, FillRule, IntPoint, JoinStyle, OffsetParams, Path, PathSet,
    Point, Shape, ShapeGroup,
};
pub use validate::Operation;
