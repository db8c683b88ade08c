//! Error types for expand and wire decoding
//!
//! Every error carries the field path at which it occurred so that failures deep
//! inside a definition (sheets, visuals, field wells, ...) stay actionable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathSegment {
    /// A named field of a block
    Field(String),
    /// An element of a list or set
    Index(usize),
}

/// Location of a node inside a configuration tree, e.g.
/// `sheets[2].visuals[0].bar_chart_visual.chart_configuration`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path (the node passed to `expand`)
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments, outermost first
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a copy of this path extended by a field name
    pub fn field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Return a copy of this path extended by an element index
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// What went wrong while expanding (or decoding) a node
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpandErrorKind {
    /// The tree node's kind does not match what the schema expects here
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A string is not in the declared enum value set
    #[error("invalid enum value {value:?}, expected one of [{}]", .allowed.join(", "))]
    InvalidEnumValue { value: String, allowed: Vec<String> },

    /// A required field is absent
    #[error("missing required field {field:?}")]
    MissingRequiredField { field: String },

    /// More than one candidate of a oneof group is populated
    #[error("ambiguous variant: only one of [{}] may be set", .populated.join(", "))]
    AmbiguousVariant { populated: Vec<String> },

    /// A oneof block is present where a value is required but no candidate is populated
    #[error("exactly one of [{}] must be set", .candidates.join(", "))]
    EmptyVariant { candidates: Vec<String> },

    /// A scalar could not be parsed in its declared format
    #[error("malformed {kind} value {value:?}: {reason}")]
    MalformedScalar {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// Element count outside the declared bounds
    #[error("expected between {min} and {max} elements, found {actual}")]
    CardinalityViolation {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// A scalar violates its length, pattern or range constraint
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Recursion guard
    #[error("maximum nesting depth exceeded: {depth} > {max}")]
    MaxDepthExceeded { depth: usize, max: usize },
}

/// A conversion failure and the path at which it occurred
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{path}: {kind}")]
pub struct ExpandError {
    pub path: FieldPath,
    pub kind: ExpandErrorKind,
}

impl ExpandError {
    /// An error at the current node; outer frames add their segments while unwinding
    pub fn new(kind: ExpandErrorKind) -> Self {
        Self {
            path: FieldPath::root(),
            kind,
        }
    }

    /// Prefix the path with a field name
    pub fn within_field(mut self, name: &str) -> Self {
        self.path.prepend(PathSegment::Field(name.to_string()));
        self
    }

    /// Prefix the path with an element index
    pub fn within_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }

    pub fn kind(&self) -> &ExpandErrorKind {
        &self.kind
    }
}

impl From<ExpandErrorKind> for ExpandError {
    fn from(kind: ExpandErrorKind) -> Self {
        ExpandError::new(kind)
    }
}

/// Result type for expand and wire decoding
pub type ExpandResult<T> = Result<T, ExpandError>;
