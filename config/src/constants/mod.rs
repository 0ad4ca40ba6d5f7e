//! Centralized configuration values shared across the shape-ops workspace.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates stay declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// SCALING
// =============================================================================

/// Factor applied to `double` coordinates before they reach the kernel.
///
/// Real-world values are multiplied by this factor and rounded to the kernel's
/// integer unit; kernel output is divided by it on the way back.
///
/// # Examples
/// ```
/// use config::constants::SCALE_FACTOR;
/// let kernel_units = (1.5 * SCALE_FACTOR).round() as i64;
/// assert_eq!(kernel_units, 1_500_000);
/// ```
pub const SCALE_FACTOR: f64 = 1_000_000.0;

/// Smallest number of vertices a closed path needs to enclose any area.
///
/// Shorter paths are dropped on input and on output.
///
/// # Examples
/// ```
/// use config::constants::MIN_PATH_POINTS;
/// let path = [(0.0, 0.0), (1.0, 0.0)];
/// assert!(path.len() < MIN_PATH_POINTS);
/// ```
pub const MIN_PATH_POINTS: usize = 3;

// =============================================================================
// OFFSET DEFAULTS
// =============================================================================

/// Miter limit used when the caller does not supply one.
///
/// Expressed as a multiple of the offset delta.
pub const DEFAULT_MITER_LIMIT: f64 = 30.0;

/// Divisor applied to the scale factor to obtain the arc tolerance of closed
/// polygon offsets.
///
/// The closed-polygon tolerance is `scale / 10` kernel units in both
/// coordinate modes.
///
/// # Examples
/// ```
/// use config::constants::{CLOSED_ARC_TOLERANCE_DIVISOR, SCALE_FACTOR};
/// assert_eq!(SCALE_FACTOR / CLOSED_ARC_TOLERANCE_DIVISOR, 100_000.0);
/// ```
pub const CLOSED_ARC_TOLERANCE_DIVISOR: f64 = 10.0;

/// Arc tolerance, in kernel units, of open line offsets.
///
/// Fixed regardless of coordinate mode.
pub const OPEN_ARC_TOLERANCE: f64 = 0.25;

/// Fraction of `|delta|` above which an arc tolerance is clamped.
pub const ARC_TOLERANCE_DELTA_RATIO: f64 = 0.25;

// =============================================================================
// CLEANING
// =============================================================================

/// Vertex cleaning distance, in kernel units, used when none is supplied.
///
/// Roughly `sqrt(2)`: removes vertices that are at most one unit away on
/// both axes.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CLEAN_DISTANCE;
/// assert!(DEFAULT_CLEAN_DISTANCE > std::f64::consts::SQRT_2);
/// ```
pub const DEFAULT_CLEAN_DISTANCE: f64 = 1.415;

// =============================================================================
// DEBUG TIERS
// =============================================================================

/// Verbosity at which operation parameters are logged.
pub const DEBUG_PARAMETERS: u32 = 1;

/// Verbosity at which path counts around kernel calls are logged.
pub const DEBUG_PATH_COUNTS: u32 = 2;

/// Verbosity at which per-path lengths are logged.
pub const DEBUG_PATHS: u32 = 3;

/// Verbosity at which every converted point is logged.
pub const DEBUG_POINTS: u32 = 4;

// =============================================================================
// VALIDATION
// =============================================================================

/// Checks a candidate scale factor.
///
/// # Examples
/// ```
/// use config::constants::{validate_scale, ConfigError};
/// assert!(validate_scale(1_000.0).is_ok());
/// assert_eq!(validate_scale(0.0), Err(ConfigError::InvalidScale(0.0)));
/// ```
pub fn validate_scale(scale: f64) -> Result<f64, ConfigError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConfigError::InvalidScale(scale));
    }
    Ok(scale)
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the scale factor is zero, negative or not finite.
    InvalidScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScale(value) => {
                write!(f, "scale factor must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
