//! # Geometry and Parameter Types
//!
//! Points, paths and the closed enumerations the validator produces.
//!
//! ## Coordinate spaces
//!
//! - [`Point`]: caller units (`f64`), either real-world or pre-scaled
//! - [`IntPoint`]: kernel fixed-point units (`i64`)

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;
use std::fmt;

// =============================================================================
// POINTS AND PATHS
// =============================================================================

/// Caller-facing coordinate pair, exchanged with hosts as `{x, y}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kernel coordinate pair in fixed-point units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    /// Horizontal coordinate
    pub x: i64,
    /// Vertical coordinate
    pub y: i64,
}

impl IntPoint {
    /// Creates a kernel point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Ordered vertices of one implicitly closed boundary.
pub type Path = Vec<IntPoint>;

/// Ordered collection of paths.
pub type PathSet = Vec<Path>;

/// Caller-unit path.
pub type Shape = Vec<Point>;

// =============================================================================
// SHAPE GROUP
// =============================================================================

/// One outer boundary plus the holes that follow it in kernel output.
///
/// Hosts see a group as a plain path list whose first entry is the outer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGroup<P = IntPoint> {
    /// Outer boundary
    pub outer: Vec<P>,
    /// Hole boundaries, in kernel output order
    pub holes: Vec<Vec<P>>,
}

impl<P> ShapeGroup<P> {
    /// Opens a group with no holes.
    #[must_use]
    pub fn new(outer: Vec<P>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Iterates the outer followed by every hole.
    pub fn paths(&self) -> impl Iterator<Item = &Vec<P>> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Number of paths in the group, outer included.
    #[must_use]
    pub fn path_count(&self) -> usize {
        1 + self.holes.len()
    }

    /// Converts every vertex, keeping the outer/hole structure.
    pub fn map_paths<Q>(&self, mut convert: impl FnMut(&[P]) -> Vec<Q>) -> ShapeGroup<Q> {
        ShapeGroup {
            outer: convert(&self.outer),
            holes: self.holes.iter().map(|hole| convert(hole)).collect(),
        }
    }
}

impl<P: Serialize> Serialize for ShapeGroup<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.path_count()))?;
        for path in self.paths() {
            seq.serialize_element(path)?;
        }
        seq.end()
    }
}

// =============================================================================
// PARAMETER ENUMERATIONS
// =============================================================================

/// Unit system of caller coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateMode {
    /// Real-world units, scaled into kernel units
    Double,
    /// Already in kernel units
    Integer,
}

impl CoordinateMode {
    /// Host token for the mode.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Integer => "integer",
        }
    }

    /// Parses an exact host token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "double" => Some(Self::Double),
            "integer" => Some(Self::Integer),
            _ => None,
        }
    }
}

/// Corner treatment applied when offsetting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JoinStyle {
    /// Sharp corners, squared off past the miter limit
    #[default]
    Miter,
    /// Corners squared off at the offset distance
    Square,
    /// Circular arcs
    Round,
}

impl JoinStyle {
    /// Host token for the join style.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Miter => "jtMiter",
            Self::Square => "jtSquare",
            Self::Round => "jtRound",
        }
    }

    /// Parses an exact host token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "jtMiter" => Some(Self::Miter),
            "jtSquare" => Some(Self::Square),
            "jtRound" => Some(Self::Round),
            _ => None,
        }
    }
}

/// Boolean combination applied by `clip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClipKind {
    /// Regions inside both operands
    #[default]
    Intersection,
    /// Regions inside either operand
    Union,
    /// Subject regions outside the clip
    Difference,
    /// Regions inside exactly one operand
    Xor,
}

impl ClipKind {
    /// Host token for the clip kind.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Intersection => "ctIntersection",
            Self::Union => "ctUnion",
            Self::Difference => "ctDifference",
            Self::Xor => "ctXor",
        }
    }

    /// Parses an exact host token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ctIntersection" => Some(Self::Intersection),
            "ctUnion" => Some(Self::Union),
            "ctDifference" => Some(Self::Difference),
            "ctXor" => Some(Self::Xor),
            _ => None,
        }
    }
}

/// How path ends are treated by the offsetter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndStyle {
    /// Path is a closed polygon
    ClosedPolygon,
    /// Path is an open line with flat ends at the path end points
    OpenButt,
}

/// Rule deciding which regions count as inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Non-zero winding number
    #[default]
    NonZero,
    /// Strictly positive winding number
    Positive,
}

macro_rules! display_token {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        })*
    };
}

display_token!(CoordinateMode, JoinStyle, ClipKind);

// =============================================================================
// OPERATION PARAMETERS
// =============================================================================

/// Parameters shared by `offset` and `line_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetParams {
    /// Unit system of the shapes and of `delta`
    pub mode: CoordinateMode,
    /// Offset distance (positive expands, negative shrinks)
    pub delta: f64,
    /// Corner treatment
    pub join: JoinStyle,
    /// Miter limit as a multiple of `delta`
    pub miter_limit: f64,
}

impl OffsetParams {
    /// Offset with the default join style and miter limit.
    #[must_use]
    pub fn new(mode: CoordinateMode, delta: f64) -> Self {
        Self {
            mode,
            delta,
            join: JoinStyle::default(),
            miter_limit: config::constants::DEFAULT_MITER_LIMIT,
        }
    }

    /// Replaces the join style.
    #[must_use]
    pub fn with_join(mut self, join: JoinStyle) -> Self {
        self.join = join;
        self
    }

    /// Replaces the miter limit.
    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }
}
