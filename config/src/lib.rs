//! # Config Crate
//!
//! Centralized configuration constants for the shape-ops workspace.
//! All magic numbers used by the polygon façade (scale factor, offset and
//! cleaning defaults, debug tiers) are defined here so the codec, the kernel
//! and the host bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SCALE_FACTOR, DEFAULT_MITER_LIMIT};
//!
//! let delta = 0.5;
//! let kernel_delta = (delta * SCALE_FACTOR).round() as i64;
//! assert_eq!(kernel_delta, 500_000);
//! assert_eq!(DEFAULT_MITER_LIMIT, 30.0);
//! ```

pub mod constants;
