//! Domain object graph values
//!
//! The resolved, strongly-shaped mirror of a configuration tree: typed leaves,
//! structs with optional fields, ordered sequences and resolved oneof variants.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A typed scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Leaf {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// A value of a closed string set
    Enum(String),
    /// An absolute instant, keeping the offset it was written with
    Timestamp(DateTime<FixedOffset>),
    /// A `#RRGGBB` colour
    Color(String),
}

impl Leaf {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Leaf::String(_) => "string",
            Leaf::Integer(_) => "integer",
            Leaf::Float(_) => "float",
            Leaf::Bool(_) => "bool",
            Leaf::Enum(_) => "enum",
            Leaf::Timestamp(_) => "timestamp",
            Leaf::Color(_) => "color",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::String(s) | Leaf::Enum(s) | Leaf::Color(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Leaf::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Leaf::Float(v) => Some(*v),
            Leaf::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

/// A node of the domain object graph
///
/// Absent optional fields are simply missing from [`DomainValue::Struct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainValue {
    Leaf(Leaf),
    Struct(BTreeMap<String, DomainValue>),
    Sequence(Vec<DomainValue>),
    /// The single populated member of a oneof group
    Variant(String, Box<DomainValue>),
}

impl DomainValue {
    /// Build a struct from `(field, value)` pairs
    pub fn structure<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, DomainValue)>,
        K: Into<String>,
    {
        DomainValue::Struct(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn variant(tag: impl Into<String>, value: DomainValue) -> Self {
        DomainValue::Variant(tag.into(), Box::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        DomainValue::Leaf(Leaf::String(value.into()))
    }

    pub fn enumeration(value: impl Into<String>) -> Self {
        DomainValue::Leaf(Leaf::Enum(value.into()))
    }

    pub fn integer(value: i64) -> Self {
        DomainValue::Leaf(Leaf::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        DomainValue::Leaf(Leaf::Float(value))
    }

    pub fn boolean(value: bool) -> Self {
        DomainValue::Leaf(Leaf::Bool(value))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DomainValue::Leaf(_) => "leaf",
            DomainValue::Struct(_) => "struct",
            DomainValue::Sequence(_) => "sequence",
            DomainValue::Variant(..) => "variant",
        }
    }

    /// Field lookup on a struct
    pub fn get(&self, name: &str) -> Option<&DomainValue> {
        match self {
            DomainValue::Struct(fields) => fields.get(name),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            DomainValue::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DomainValue]> {
        match self {
            DomainValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_variant(&self) -> Option<(&str, &DomainValue)> {
        match self {
            DomainValue::Variant(tag, value) => Some((tag, value)),
            _ => None,
        }
    }

    /// Number of populated fields of a struct, 0 for other kinds
    pub fn field_count(&self) -> usize {
        match self {
            DomainValue::Struct(fields) => fields.len(),
            _ => 0,
        }
    }
}

impl From<Leaf> for DomainValue {
    fn from(leaf: Leaf) -> Self {
        DomainValue::Leaf(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let value = DomainValue::structure([
            ("filter_id", DomainValue::string("f1")),
            (
                "aggregation_function",
                DomainValue::variant(
                    "categorical_aggregation_function",
                    DomainValue::enumeration("COUNT"),
                ),
            ),
        ]);

        assert_eq!(value.field_count(), 2);
        assert_eq!(
            value.get("filter_id").and_then(DomainValue::as_leaf),
            Some(&Leaf::String("f1".to_string()))
        );
        let (tag, payload) = value
            .get("aggregation_function")
            .and_then(DomainValue::as_variant)
            .unwrap();
        assert_eq!(tag, "categorical_aggregation_function");
        assert_eq!(payload.as_leaf().and_then(Leaf::as_str), Some("COUNT"));
    }

    #[test]
    fn test_leaf_numeric_views() {
        assert_eq!(Leaf::Integer(5).as_f64(), Some(5.0));
        assert_eq!(Leaf::Float(2.5).as_i64(), None);
    }
}
