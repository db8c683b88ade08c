//! Schema descriptor types
//!
//! Descriptors are immutable once built and shared by reference (`Arc`) across
//! every parent node type that embeds them.

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;

/// Leaf value format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Bool,
    /// Closed string set, see [`Constraints::enum_values`]
    Enum,
    /// RFC 3339 string in the tree, instant in the domain
    Timestamp,
    /// Integer carried as a string in the tree, `""`/`"null"` meaning unset
    NullableInt,
    /// `#RRGGBB` string
    Color,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
            ScalarKind::Enum => "enum",
            ScalarKind::Timestamp => "timestamp",
            ScalarKind::NullableInt => "nullable integer",
            ScalarKind::Color => "color",
        }
    }

    /// Kinds whose tree representation is a string
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            ScalarKind::String
                | ScalarKind::Enum
                | ScalarKind::Timestamp
                | ScalarKind::NullableInt
                | ScalarKind::Color
        )
    }
}

/// Value constraints of a scalar
///
/// Only `enum_values` is enforced unconditionally; the others are checked when
/// constraint validation is enabled.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Inclusive length bounds, in characters
    pub length: Option<(usize, usize)>,
    pub pattern: Option<Regex>,
    /// Inclusive numeric bounds
    pub range: Option<(f64, f64)>,
    pub enum_values: Vec<String>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.pattern.is_none()
            && self.range.is_none()
            && self.enum_values.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ScalarSchema {
    pub kind: ScalarKind,
    pub constraints: Constraints,
}

impl ScalarSchema {
    pub fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            constraints: Constraints::default(),
        }
    }

    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.constraints.length = Some((min, max));
        self
    }

    pub fn with_pattern(mut self, pattern: &Regex) -> Self {
        self.constraints.pattern = Some(pattern.clone());
        self
    }

    /// Compile and attach a pattern
    pub fn with_pattern_str(self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(self.with_pattern(&regex))
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.constraints.range = Some((min, max));
        self
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.enum_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Repetition rule of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Required,
    OptionalSingle,
    /// Ordered repetition with inclusive bounds
    List { min: usize, max: usize },
    /// Unordered repetition with inclusive bounds
    Set { min: usize, max: usize },
}

impl Cardinality {
    pub fn is_repeated(&self) -> bool {
        matches!(self, Cardinality::List { .. } | Cardinality::Set { .. })
    }

    pub fn bounds(&self) -> (usize, usize) {
        match self {
            Cardinality::Required => (1, 1),
            Cardinality::OptionalSingle => (0, 1),
            Cardinality::List { min, max } | Cardinality::Set { min, max } => (*min, *max),
        }
    }
}

/// A named field of a struct, or a candidate of a oneof group
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub node: Arc<SchemaNode>,
    pub cardinality: Cardinality,
    /// Member name in the service wire shape when it differs from the PascalCase field name
    pub wire_name: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, node: Arc<SchemaNode>, cardinality: Cardinality) -> Self {
        Self {
            name: name.into(),
            node,
            cardinality,
            wire_name: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.cardinality == Cardinality::Required
    }

    pub fn wire_name(&self) -> Cow<'_, str> {
        match &self.wire_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(pascal_case(&self.name)),
        }
    }
}

/// A block with fixed named fields
#[derive(Debug, Clone)]
pub struct StructSchema {
    /// Type name, e.g. `CategoryFilter`
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl StructSchema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A block whose fields are pairwise mutually exclusive
#[derive(Debug, Clone)]
pub struct OneOfSchema {
    /// Type name, e.g. `Filter`
    pub name: String,
    /// Candidates in declaration order
    pub variants: Vec<Field>,
}

impl OneOfSchema {
    pub fn variant(&self, tag: &str) -> Option<&Field> {
        self.variants.iter().find(|f| f.name == tag)
    }

    pub fn candidate_names(&self) -> Vec<String> {
        self.variants.iter().map(|f| f.name.clone()).collect()
    }
}

/// Legal shape of a node
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Scalar(ScalarSchema),
    Struct(StructSchema),
    OneOf(OneOfSchema),
}

impl SchemaNode {
    /// Type name for structs and oneof groups, kind name for scalars
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Scalar(s) => s.kind.name(),
            SchemaNode::Struct(s) => &s.name,
            SchemaNode::OneOf(o) => &o.name,
        }
    }

    /// Whether the node is carried as a block (and so wrapped in a list when single)
    pub fn is_block(&self) -> bool {
        !matches!(self, SchemaNode::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&ScalarSchema> {
        match self {
            SchemaNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructSchema> {
        match self {
            SchemaNode::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_oneof(&self) -> Option<&OneOfSchema> {
        match self {
            SchemaNode::OneOf(o) => Some(o),
            _ => None,
        }
    }
}

/// `snake_case` to `PascalCase`
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("filter_id"), "FilterId");
        assert_eq!(pascal_case("bar_chart_visual"), "BarChartVisual");
        assert_eq!(pascal_case("value"), "Value");
    }

    #[test]
    fn test_field_wire_name_override() {
        let node = Arc::new(SchemaNode::Scalar(ScalarSchema::new(ScalarKind::String)));
        let mut field = Field::new("kpi_visual", node, Cardinality::OptionalSingle);
        assert_eq!(field.wire_name(), "KpiVisual");
        field.wire_name = Some("KPIVisual".to_string());
        assert_eq!(field.wire_name(), "KPIVisual");
    }

    #[test]
    fn test_cardinality_bounds() {
        assert_eq!(Cardinality::Required.bounds(), (1, 1));
        assert_eq!(Cardinality::List { min: 1, max: 20 }.bounds(), (1, 20));
        assert!(Cardinality::Set { min: 0, max: 5 }.is_repeated());
        assert!(!Cardinality::OptionalSingle.is_repeated());
    }

    #[test]
    fn test_pattern_str_reports_invalid_regex() {
        assert!(ScalarSchema::new(ScalarKind::String).with_pattern_str("[").is_err());
        assert!(ScalarSchema::new(ScalarKind::String).with_pattern_str("^[a-z]+$").is_ok());
    }
}
