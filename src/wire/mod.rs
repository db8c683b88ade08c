//! Service wire shape
//!
//! Renders domain values as the JSON documents the analytics service accepts
//! and returns: PascalCase member names, oneof groups as single-member
//! objects, nullable integers as plain numbers. Timestamps are written as
//! RFC 3339 strings and read from either strings or epoch seconds.

use chrono::DateTime;
use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::convert::codec::{format_timestamp, parse_timestamp};
use crate::error::{ExpandError, ExpandErrorKind, ExpandResult};
use crate::models::{DomainValue, Leaf};
use crate::schema::{Cardinality, Field, ScalarKind, ScalarSchema, SchemaNode, pascal_case};

/// Wire decoding shares the expand error type
pub type WireError = ExpandError;

/// Render a domain value in the wire shape of `node`
pub fn to_wire(value: &DomainValue, node: &SchemaNode) -> Value {
    match (value, node) {
        (DomainValue::Leaf(leaf), SchemaNode::Scalar(_)) => leaf_to_wire(leaf),
        (DomainValue::Struct(fields), SchemaNode::Struct(schema)) => {
            let mut object = Map::new();
            for (name, value) in fields {
                match schema.field(name) {
                    Some(field) => {
                        object.insert(field.wire_name().into_owned(), field_to_wire(value, field));
                    }
                    None => warn!("Dropping field {:?} unknown to {}", name, schema.name),
                }
            }
            Value::Object(object)
        }
        (DomainValue::Variant(tag, payload), SchemaNode::OneOf(schema)) => {
            let mut object = Map::new();
            match schema.variant(tag) {
                Some(field) => {
                    object.insert(field.wire_name().into_owned(), field_to_wire(payload, field));
                }
                None => {
                    warn!("Variant {:?} is not a candidate of {}", tag, schema.name);
                    object.insert(pascal_case(tag), untyped(payload));
                }
            }
            Value::Object(object)
        }
        (value, node) => {
            warn!(
                "Rendering {} value without schema guidance: expected {}",
                value.kind_name(),
                node.name()
            );
            untyped(value)
        }
    }
}

fn field_to_wire(value: &DomainValue, field: &Field) -> Value {
    match (field.cardinality, value) {
        (Cardinality::List { .. } | Cardinality::Set { .. }, DomainValue::Sequence(items)) => {
            Value::Array(items.iter().map(|item| to_wire(item, &field.node)).collect())
        }
        (Cardinality::List { .. } | Cardinality::Set { .. }, single) => {
            Value::Array(vec![to_wire(single, &field.node)])
        }
        _ => to_wire(value, &field.node),
    }
}

fn leaf_to_wire(leaf: &Leaf) -> Value {
    match leaf {
        Leaf::String(s) | Leaf::Enum(s) | Leaf::Color(s) => Value::String(s.clone()),
        Leaf::Integer(v) => Value::Number(Number::from(*v)),
        Leaf::Float(v) => Number::from_f64(*v).map(Value::Number).unwrap_or(Value::Null),
        Leaf::Bool(b) => Value::Bool(*b),
        Leaf::Timestamp(ts) => Value::String(format_timestamp(ts)),
    }
}

fn untyped(value: &DomainValue) -> Value {
    match value {
        DomainValue::Leaf(leaf) => leaf_to_wire(leaf),
        DomainValue::Struct(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| (pascal_case(name), untyped(value)))
                .collect(),
        ),
        DomainValue::Sequence(items) => Value::Array(items.iter().map(untyped).collect()),
        DomainValue::Variant(tag, payload) => {
            let mut object = Map::new();
            object.insert(pascal_case(tag), untyped(payload));
            Value::Object(object)
        }
    }
}

/// Read a wire document of shape `node`
///
/// Error paths use wire member names, e.g. `Sheets[0].Visuals[1].BarChartVisual`.
pub fn from_wire(value: &Value, node: &SchemaNode) -> ExpandResult<DomainValue> {
    match node {
        SchemaNode::Scalar(schema) => scalar_from_wire(value, schema).map(DomainValue::Leaf),
        SchemaNode::Struct(schema) => {
            let object = object(value)?;
            let mut fields = std::collections::BTreeMap::new();
            for field in &schema.fields {
                let wire_name = field.wire_name();
                match member(object, &wire_name) {
                    Some(member) => {
                        if let Some(decoded) =
                            field_from_wire(member, field).map_err(|e| e.within_field(&wire_name))?
                        {
                            fields.insert(field.name.clone(), decoded);
                        } else if field.is_required() {
                            return Err(missing(&wire_name));
                        }
                    }
                    None if field.is_required() => return Err(missing(&wire_name)),
                    None => {}
                }
            }
            Ok(DomainValue::Struct(fields))
        }
        SchemaNode::OneOf(schema) => {
            let object = object(value)?;
            let populated: Vec<(&Field, &Value)> = schema
                .variants
                .iter()
                .filter_map(|field| {
                    member(object, &field.wire_name())
                        .filter(|v| !matches!(v, Value::Array(items) if items.is_empty()))
                        .map(|v| (field, v))
                })
                .collect();

            match populated.as_slice() {
                [] => Err(ExpandError::new(ExpandErrorKind::EmptyVariant {
                    candidates: schema.variants.iter().map(|f| f.wire_name().into_owned()).collect(),
                })),
                [(field, member)] => {
                    let wire_name = field.wire_name();
                    match field_from_wire(member, field).map_err(|e| e.within_field(&wire_name))? {
                        Some(payload) => Ok(DomainValue::Variant(field.name.clone(), Box::new(payload))),
                        None => Err(ExpandError::new(ExpandErrorKind::EmptyVariant {
                            candidates: vec![wire_name.into_owned()],
                        })),
                    }
                }
                many => Err(ExpandError::new(ExpandErrorKind::AmbiguousVariant {
                    populated: many.iter().map(|(f, _)| f.wire_name().into_owned()).collect(),
                })),
            }
        }
    }
}

fn field_from_wire(value: &Value, field: &Field) -> ExpandResult<Option<DomainValue>> {
    match field.cardinality {
        Cardinality::Required | Cardinality::OptionalSingle => from_wire(value, &field.node).map(Some),
        Cardinality::List { .. } | Cardinality::Set { .. } => {
            let items = match value {
                Value::Array(items) => items,
                other => {
                    return Err(ExpandError::new(ExpandErrorKind::TypeMismatch {
                        expected: "array",
                        found: json_kind(other),
                    }));
                }
            };
            if items.is_empty() {
                return Ok(None);
            }
            let elements = items
                .iter()
                .enumerate()
                .map(|(index, item)| from_wire(item, &field.node).map_err(|e| e.within_index(index)))
                .collect::<ExpandResult<Vec<_>>>()?;
            Ok(Some(DomainValue::Sequence(elements)))
        }
    }
}

fn scalar_from_wire(value: &Value, schema: &ScalarSchema) -> ExpandResult<Leaf> {
    let mismatch = || {
        ExpandError::new(ExpandErrorKind::TypeMismatch {
            expected: schema.kind.name(),
            found: json_kind(value),
        })
    };
    let malformed = |reason: &str| {
        ExpandError::new(ExpandErrorKind::MalformedScalar {
            kind: schema.kind.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
    };

    match (schema.kind, value) {
        (ScalarKind::String, Value::String(s)) => Ok(Leaf::String(s.clone())),
        (ScalarKind::Color, Value::String(s)) => Ok(Leaf::Color(s.clone())),
        (ScalarKind::Enum, Value::String(s)) => {
            if schema.constraints.enum_values.iter().any(|v| v == s) {
                Ok(Leaf::Enum(s.clone()))
            } else {
                Err(ExpandError::new(ExpandErrorKind::InvalidEnumValue {
                    value: s.clone(),
                    allowed: schema.constraints.enum_values.clone(),
                }))
            }
        }
        (ScalarKind::Bool, Value::Bool(b)) => Ok(Leaf::Bool(*b)),
        (ScalarKind::Integer, Value::Number(n)) => n
            .as_i64()
            .map(Leaf::Integer)
            .ok_or_else(|| malformed("not an integer")),
        (ScalarKind::NullableInt, Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(|v| Leaf::Integer(i64::from(v)))
            .ok_or_else(|| malformed("not a 32-bit integer")),
        (ScalarKind::NullableInt, Value::String(s)) => s
            .parse::<i32>()
            .map(|v| Leaf::Integer(i64::from(v)))
            .map_err(|e| malformed(&e.to_string())),
        (ScalarKind::Float, Value::Number(n)) => n
            .as_f64()
            .map(Leaf::Float)
            .ok_or_else(|| malformed("not a float")),
        (ScalarKind::Timestamp, Value::String(s)) => parse_timestamp(s)
            .map(Leaf::Timestamp)
            .map_err(|e| malformed(&e.to_string())),
        (ScalarKind::Timestamp, Value::Number(n)) => {
            let seconds = n.as_f64().ok_or_else(|| malformed("not a number"))?;
            let whole = seconds.floor();
            let nanos = ((seconds - whole) * 1e9).round() as u32;
            DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
                .map(|ts| Leaf::Timestamp(ts.fixed_offset()))
                .ok_or_else(|| malformed("epoch seconds out of range"))
        }
        _ => Err(mismatch()),
    }
}

fn object(value: &Value) -> ExpandResult<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ExpandError::new(ExpandErrorKind::TypeMismatch {
            expected: "object",
            found: json_kind(value),
        })
    })
}

/// Member lookup treating `null` as absent
fn member<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|v| !v.is_null())
}

fn missing(wire_name: &str) -> ExpandError {
    ExpandError::new(ExpandErrorKind::MissingRequiredField {
        field: wire_name.to_string(),
    })
    .within_field(wire_name)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
