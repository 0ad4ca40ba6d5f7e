//! # Error Types
//!
//! Error types for façade operations. Malformed calls are reported before
//! any geometry is touched; an empty geometric result is not an error.
//!
//! ## Error Policy
//!
//! - Argument problems are detected up front and abort the operation
//! - Kernel faults are caught at the call boundary and reported
//! - Empty output is a successful `Ok(None)`

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while running a façade operation.
///
/// ## Example
///
/// ```rust
/// use shape_ops::{ClipError, Operation, ShapeOps};
///
/// let ops = ShapeOps::default();
/// match ops.call(Operation::Offset, &[serde_json::json!([]), "double".into()]) {
///     Err(ClipError::ArgumentCount { required, .. }) => assert_eq!(required, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ClipError {
    /// Fewer arguments than the operation requires.
    #[error("too few arguments for '{operation}': {required} required, {received} received")]
    ArgumentCount {
        /// Host name of the operation
        operation: &'static str,
        /// Minimum number of arguments
        required: usize,
        /// Number of arguments supplied
        received: usize,
    },

    /// Wrong type, or a value outside an enumerated set, at a given position.
    ///
    /// The message names the parameter and echoes the received value.
    #[error("wrong argument '{parameter}': {expected}: {received}")]
    ArgumentType {
        /// Parameter name as documented for the host
        parameter: &'static str,
        /// Human readable description of what is accepted
        expected: &'static str,
        /// The offending value, rendered for display
        received: String,
    },

    /// A fault raised inside the geometric kernel, or input it rejected.
    #[error("kernel fault during '{operation}': {message}")]
    Kernel {
        /// Host name of the operation
        operation: &'static str,
        /// Fault description recovered from the kernel
        message: String,
    },

    /// Output could not be encoded for the host.
    #[error("failed to encode result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClipError {
    /// Creates an argument type error.
    pub fn argument_type(
        parameter: &'static str,
        expected: &'static str,
        received: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            parameter,
            expected,
            received: received.into(),
        }
    }

    /// True for the two classes detected before any kernel call.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. } | Self::ArgumentType { .. })
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for façade operations.
pub type ClipResult<T> = Result<T, ClipError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_type_display_echoes_value() {
        let err = ClipError::argument_type("joinType", "'jtMiter' || 'jtSquare' || 'jtRound' required", "jtBevel");
        let message = err.to_string();
        assert!(message.contains("joinType"));
        assert!(message.contains("jtBevel"));
    }

    #[test]
    fn argument_count_display() {
        let err = ClipError::ArgumentCount {
            operation: "offset",
            required: 3,
            received: 2,
        };
        assert_eq!(
            err.to_string(),
            "too few arguments for 'offset': 3 required, 2 received"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn kernel_error_is_not_argument_error() {
        let err = ClipError::Kernel {
            operation: "clip",
            message: "overflow".to_string(),
        };
        assert!(!err.is_argument_error());
        assert!(err.to_string().contains("overflow"));
    }

    /// Errors cross thread boundaries when calls run concurrently.
    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClipError>();
    }
}
