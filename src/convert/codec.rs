//! Scalar codec
//!
//! Converts single leaf values between the tree and domain representations
//! according to the declared [`ScalarKind`].

use chrono::{DateTime, FixedOffset, SecondsFormat};

use super::config::ConversionConfig;
use crate::error::ExpandErrorKind;
use crate::models::{Leaf, Scalar};
use crate::schema::{ScalarKind, ScalarSchema};

/// String written by the host for an unset nullable integer
pub const NULL_SENTINEL: &str = "null";

/// Whether a tree string stands for an unset nullable integer
pub fn is_null_sentinel(value: &str) -> bool {
    value.is_empty() || value == NULL_SENTINEL
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}

/// RFC 3339 with fractional seconds only when present and `Z` for UTC
pub fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Decode a tree scalar
///
/// `Ok(None)` means the value stands for an absent field (a nullable integer
/// sentinel, or an empty string when `empty_strings_as_absent` is set).
/// Malformed timestamps and nullable integers are reported as
/// `MalformedScalar`; applying the lenient policy is up to the caller.
pub fn decode(
    value: &Scalar,
    schema: &ScalarSchema,
    config: &ConversionConfig,
) -> Result<Option<Leaf>, ExpandErrorKind> {
    let kind = schema.kind;
    if kind.is_textual()
        && config.empty_strings_as_absent
        && let Scalar::String(s) = value
        && s.is_empty()
    {
        return Ok(None);
    }

    match (kind, value) {
        (ScalarKind::String, Scalar::String(s)) => Ok(Some(Leaf::String(s.clone()))),
        (ScalarKind::Color, Scalar::String(s)) => Ok(Some(Leaf::Color(s.clone()))),
        (ScalarKind::Enum, Scalar::String(s)) => {
            if schema.constraints.enum_values.iter().any(|v| v == s) {
                Ok(Some(Leaf::Enum(s.clone())))
            } else {
                Err(ExpandErrorKind::InvalidEnumValue {
                    value: s.clone(),
                    allowed: schema.constraints.enum_values.clone(),
                })
            }
        }
        (ScalarKind::Bool, Scalar::Bool(b)) => Ok(Some(Leaf::Bool(*b))),
        (ScalarKind::Integer, Scalar::Number(n)) => match integral(n) {
            Some(v) => Ok(Some(Leaf::Integer(v))),
            None => Err(malformed(kind, n.to_string(), "not an integral number")),
        },
        (ScalarKind::Float, Scalar::Number(n)) => match n.as_f64() {
            Some(v) => Ok(Some(Leaf::Float(v))),
            None => Err(malformed(kind, n.to_string(), "not representable as a float")),
        },
        (ScalarKind::Float, Scalar::String(s)) => match non_finite(s) {
            Some(v) => Ok(Some(Leaf::Float(v))),
            None => Err(ExpandErrorKind::TypeMismatch {
                expected: kind.name(),
                found: "string",
            }),
        },
        (ScalarKind::Timestamp, Scalar::String(s)) => match parse_timestamp(s) {
            Ok(ts) => Ok(Some(Leaf::Timestamp(ts))),
            Err(e) => Err(malformed(kind, s.clone(), &e.to_string())),
        },
        (ScalarKind::NullableInt, Scalar::String(s)) => {
            if is_null_sentinel(s) {
                return Ok(None);
            }
            match s.parse::<i32>() {
                Ok(v) => Ok(Some(Leaf::Integer(i64::from(v)))),
                Err(e) => Err(malformed(kind, s.clone(), &e.to_string())),
            }
        }
        (ScalarKind::NullableInt, Scalar::Number(n)) => match integral(n).and_then(|v| i32::try_from(v).ok()) {
            Some(v) => Ok(Some(Leaf::Integer(i64::from(v)))),
            None => Err(malformed(kind, n.to_string(), "not a 32-bit integer")),
        },
        (kind, other) => Err(ExpandErrorKind::TypeMismatch {
            expected: kind.name(),
            found: other.kind_name(),
        }),
    }
}

/// Encode a domain leaf for a scalar schema
///
/// Returns `None` when the leaf does not fit the declared kind.
pub fn encode(leaf: &Leaf, schema: &ScalarSchema) -> Option<Scalar> {
    match (schema.kind, leaf) {
        (
            ScalarKind::String | ScalarKind::Enum | ScalarKind::Color,
            Leaf::String(s) | Leaf::Enum(s) | Leaf::Color(s),
        ) => Some(Scalar::String(s.clone())),
        (ScalarKind::Integer, Leaf::Integer(v)) => Some(Scalar::from(*v)),
        (ScalarKind::Float, Leaf::Float(v)) => Some(Scalar::from_f64(*v)),
        (ScalarKind::Float, Leaf::Integer(v)) => Some(Scalar::from_f64(*v as f64)),
        (ScalarKind::Bool, Leaf::Bool(b)) => Some(Scalar::Bool(*b)),
        (ScalarKind::Timestamp, Leaf::Timestamp(ts)) => Some(Scalar::String(format_timestamp(ts))),
        (ScalarKind::NullableInt, Leaf::Integer(v)) => Some(Scalar::String(v.to_string())),
        _ => None,
    }
}

/// Encode a leaf without schema guidance
pub fn encode_untyped(leaf: &Leaf) -> Scalar {
    match leaf {
        Leaf::String(s) | Leaf::Enum(s) | Leaf::Color(s) => Scalar::String(s.clone()),
        Leaf::Integer(v) => Scalar::from(*v),
        Leaf::Float(v) => Scalar::from_f64(*v),
        Leaf::Bool(b) => Scalar::Bool(*b),
        Leaf::Timestamp(ts) => Scalar::String(format_timestamp(ts)),
    }
}

/// Float written as text by [`Scalar::from_f64`]
fn non_finite(value: &str) -> Option<f64> {
    match value {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn integral(n: &serde_json::Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn malformed(kind: ScalarKind, value: String, reason: &str) -> ExpandErrorKind {
    ExpandErrorKind::MalformedScalar {
        kind: kind.name(),
        value,
        reason: reason.to_string(),
    }
}
