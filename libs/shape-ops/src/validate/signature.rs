//! Operation names and their positional argument signatures.

use std::fmt;
use std::str::FromStr;

/// A façade operation as named by hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Winding of every path
    Orientation,
    /// Closed polygon offset
    Offset,
    /// Open line offset
    LineOffset,
    /// Union of many shape collections
    Union,
    /// Two-operand boolean
    Clip,
    /// Vertex cleaning
    Clean,
    /// Outer CCW, holes CW normalization
    FixOrientation,
    /// Self-intersection removal
    Simplify,
}

/// What a positional argument must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// An array of paths (or of shape collections)
    Shapes,
    /// `"double"` or `"integer"`
    Mode,
    /// Any JSON number
    Number,
    /// `"jtMiter"`, `"jtSquare"` or `"jtRound"`
    Join,
    /// One of the four `ct*` tokens
    ClipKind,
}

impl ParamKind {
    /// Description used in argument type errors.
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Shapes => "array[shapes][points][point] required",
            Self::Mode => "'double' || 'integer' required",
            Self::Number => "number required",
            Self::Join => "'jtMiter' || 'jtSquare' || 'jtRound' required",
            Self::ClipKind => {
                "'ctIntersection' || 'ctUnion' || 'ctDifference' || 'ctXor' required"
            }
        }
    }
}

/// A named positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name echoed in error messages
    pub name: &'static str,
    /// Accepted values
    pub kind: ParamKind,
}

const fn param(name: &'static str, kind: ParamKind) -> Param {
    Param { name, kind }
}

/// Minimum argument count plus the accepted value at each position.
///
/// Positions at or beyond `required` are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Minimum number of arguments
    pub required: usize,
    /// Every recognised position, required ones first
    pub params: &'static [Param],
}

const SHAPES_AND_MODE: &[Param] = &[
    param("shapes", ParamKind::Shapes),
    param("mode", ParamKind::Mode),
];

const OFFSET: &[Param] = &[
    param("shapes", ParamKind::Shapes),
    param("mode", ParamKind::Mode),
    param("delta", ParamKind::Number),
    param("joinType", ParamKind::Join),
    param("miterLimit", ParamKind::Number),
];

const UNION: &[Param] = &[
    param("collections", ParamKind::Shapes),
    param("mode", ParamKind::Mode),
];

const CLIP: &[Param] = &[
    param("subject", ParamKind::Shapes),
    param("clip", ParamKind::Shapes),
    param("mode", ParamKind::Mode),
    param("clipType", ParamKind::ClipKind),
];

const CLEAN: &[Param] = &[
    param("shapes", ParamKind::Shapes),
    param("mode", ParamKind::Mode),
    param("distance", ParamKind::Number),
];

impl Operation {
    /// Every operation, in host registration order.
    pub const ALL: [Operation; 8] = [
        Operation::Orientation,
        Operation::Offset,
        Operation::LineOffset,
        Operation::Union,
        Operation::Clip,
        Operation::Clean,
        Operation::FixOrientation,
        Operation::Simplify,
    ];

    /// Host name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orientation => "orientation",
            Self::Offset => "offset",
            Self::LineOffset => "lineOffset",
            Self::Union => "unionArrays",
            Self::Clip => "clip",
            Self::Clean => "clean",
            Self::FixOrientation => "fixOrientation",
            Self::Simplify => "simplify",
        }
    }

    /// Positional signature checked before the operation runs.
    pub const fn signature(self) -> Signature {
        match self {
            Self::Orientation | Self::FixOrientation | Self::Simplify => Signature {
                required: 2,
                params: SHAPES_AND_MODE,
            },
            Self::Offset | Self::LineOffset => Signature {
                required: 3,
                params: OFFSET,
            },
            Self::Union => Signature {
                required: 1,
                params: UNION,
            },
            Self::Clip => Signature {
                required: 2,
                params: CLIP,
            },
            Self::Clean => Signature {
                required: 2,
                params: CLEAN,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a host asks for an operation that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| UnknownOperation(name.to_string()))
    }
}
