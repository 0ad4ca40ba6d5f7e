//! # Shape and Parameter Validation
//!
//! Everything a host hands over is checked here before any geometric work:
//!
//! - `validate_shape_collection`: lenient; malformed entries are skipped
//! - `validate_parameters`: strict; the first bad position aborts the call
//!
//! Validation produces typed values (`CoordinateMode`, `JoinStyle`,
//! `ClipKind`), so later stages never compare string tokens again.

mod signature;

pub use signature::{Operation, Param, ParamKind, Signature, UnknownOperation};

use crate::error::{ClipError, ClipResult};
use crate::types::{ClipKind, CoordinateMode, JoinStyle, Point, Shape};
use config::constants::MIN_PATH_POINTS;
use serde_json::Value;

// =============================================================================
// SHAPE COLLECTIONS
// =============================================================================

/// Reads a host shape collection into caller-unit paths.
///
/// Entries that are not arrays are skipped, as are paths with fewer than
/// three points. Point fields that are missing or not numeric read as 0.
/// An empty result is a valid outcome.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use shape_ops::validate::validate_shape_collection;
///
/// let raw = json!([
///     [{"x": 0, "y": 0}, {"x": 1, "y": 1}],
///     [{"x": 0, "y": 0}, {"x": 4, "y": 0}, {"x": 4, "y": 4}, {"x": 0, "y": 4}],
///     "not a path"
/// ]);
/// let shapes = validate_shape_collection(&raw);
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].len(), 4);
/// ```
pub fn validate_shape_collection(raw: &Value) -> Vec<Shape> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_array)
        .filter(|points| points.len() >= MIN_PATH_POINTS)
        .map(|points| points.iter().map(read_point).collect())
        .collect()
}

/// Reads a list of shape collections, as taken by `union`.
///
/// Non-array entries and collections without a usable path are skipped.
pub fn validate_collections(raw: &Value) -> Vec<Vec<Shape>> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_array())
        .map(validate_shape_collection)
        .filter(|shapes| !shapes.is_empty())
        .collect()
}

fn read_point(raw: &Value) -> Point {
    Point::new(coerce_number(raw.get("x")), coerce_number(raw.get("y")))
}

/// Host-style number coercion for point fields.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// A positional argument after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    /// Position not supplied, or `null` at an optional position
    Absent,
    /// An array to be read with `validate_shape_collection`
    Shapes(&'a Value),
    /// Coordinate mode
    Mode(CoordinateMode),
    /// Numeric value
    Number(f64),
    /// Join style
    Join(JoinStyle),
    /// Clip kind
    Clip(ClipKind),
}

/// Validated arguments of one call, addressable by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments<'a> {
    values: Vec<Argument<'a>>,
}

impl<'a> Arguments<'a> {
    fn get(&self, index: usize) -> Argument<'a> {
        self.values.get(index).copied().unwrap_or(Argument::Absent)
    }

    /// Shape array at `index`.
    pub fn shapes(&self, index: usize) -> Option<&'a Value> {
        match self.get(index) {
            Argument::Shapes(value) => Some(value),
            _ => None,
        }
    }

    /// Coordinate mode at `index`.
    pub fn mode(&self, index: usize) -> Option<CoordinateMode> {
        match self.get(index) {
            Argument::Mode(mode) => Some(mode),
            _ => None,
        }
    }

    /// Number at `index`.
    pub fn number(&self, index: usize) -> Option<f64> {
        match self.get(index) {
            Argument::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Join style at `index`.
    pub fn join(&self, index: usize) -> Option<JoinStyle> {
        match self.get(index) {
            Argument::Join(join) => Some(join),
            _ => None,
        }
    }

    /// Clip kind at `index`.
    pub fn clip_kind(&self, index: usize) -> Option<ClipKind> {
        match self.get(index) {
            Argument::Clip(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Checks the argument count and every positional type of a call.
///
/// Arguments past the signature are ignored. An optional position holding
/// `null` is treated as absent.
///
/// # Errors
///
/// - [`ClipError::ArgumentCount`] when fewer than the required arguments are given
/// - [`ClipError::ArgumentType`] naming the first offending parameter
///
/// # Examples
/// ```
/// use serde_json::json;
/// use shape_ops::validate::{validate_parameters, Operation};
/// use shape_ops::{ClipError, JoinStyle};
///
/// let args = [json!([]), json!("double"), json!(1.5), json!("jtRound")];
/// let parsed = validate_parameters(Operation::Offset, &args).unwrap();
/// assert_eq!(parsed.join(3), Some(JoinStyle::Round));
///
/// let args = [json!([]), json!("float"), json!(1.5)];
/// let err = validate_parameters(Operation::Offset, &args).unwrap_err();
/// assert!(matches!(err, ClipError::ArgumentType { parameter: "mode", .. }));
/// ```
pub fn validate_parameters(operation: Operation, args: &[Value]) -> ClipResult<Arguments<'_>> {
    let signature = operation.signature();
    if args.len() < signature.required {
        return Err(ClipError::ArgumentCount {
            operation: operation.name(),
            required: signature.required,
            received: args.len(),
        });
    }

    let mut values = Vec::with_capacity(signature.params.len());
    for (index, param) in signature.params.iter().enumerate() {
        let argument = match args.get(index) {
            None => Argument::Absent,
            Some(Value::Null) if index >= signature.required => Argument::Absent,
            Some(value) => check(param, value)?,
        };
        values.push(argument);
    }

    Ok(Arguments { values })
}

fn check<'a>(param: &Param, value: &'a Value) -> ClipResult<Argument<'a>> {
    let argument = match param.kind {
        ParamKind::Shapes => value.is_array().then_some(Argument::Shapes(value)),
        ParamKind::Mode => value
            .as_str()
            .and_then(CoordinateMode::from_token)
            .map(Argument::Mode),
        ParamKind::Number => value.as_f64().map(Argument::Number),
        ParamKind::Join => value
            .as_str()
            .and_then(JoinStyle::from_token)
            .map(Argument::Join),
        ParamKind::ClipKind => value
            .as_str()
            .and_then(ClipKind::from_token)
            .map(Argument::Clip),
    };

    argument.ok_or_else(|| ClipError::argument_type(param.name, param.kind.expected(), describe(value)))
}

/// Renders a received value for an error message.
fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests;
