//! Oneof resolution
//!
//! Shared by expand and normalize: decides which candidates of a oneof block
//! are populated.

use std::collections::BTreeMap;

use super::codec::is_null_sentinel;
use crate::models::{ConfigValue, Scalar};
use crate::schema::{Field, OneOfSchema, ScalarKind, SchemaNode};

/// Outcome of scanning a oneof block
#[derive(Debug)]
pub enum Resolution<'a> {
    /// No candidate is populated
    Empty,
    /// Exactly one candidate is populated
    Single(&'a Field, &'a ConfigValue),
    /// Several candidates are populated, in declared order
    Ambiguous(Vec<(&'a Field, &'a ConfigValue)>),
}

/// Whether a tree value counts as set for the given candidate
pub fn is_populated(value: &ConfigValue, field: &Field) -> bool {
    match value {
        ConfigValue::Scalar(Scalar::String(s)) => match field.node.as_ref() {
            SchemaNode::Scalar(scalar) if scalar.kind == ScalarKind::NullableInt => !is_null_sentinel(s),
            _ => !s.is_empty(),
        },
        ConfigValue::Scalar(_) => true,
        ConfigValue::OrderedList(items) | ConfigValue::UnorderedSet(items) => !items.is_empty(),
        ConfigValue::Block(_) => true,
    }
}

/// Scan the candidates of `schema` in declared order
pub fn resolve<'a>(
    block: &'a BTreeMap<String, ConfigValue>,
    schema: &'a OneOfSchema,
) -> Resolution<'a> {
    let mut populated: Vec<(&Field, &ConfigValue)> = schema
        .variants
        .iter()
        .filter_map(|field| {
            block
                .get(&field.name)
                .filter(|value| is_populated(value, field))
                .map(|value| (field, value))
        })
        .collect();

    match populated.len() {
        0 => Resolution::Empty,
        1 => {
            let (field, value) = populated.remove(0);
            Resolution::Single(field, value)
        }
        _ => Resolution::Ambiguous(populated),
    }
}
