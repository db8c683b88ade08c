//! Canonical form of configuration trees
//!
//! Two trees that expand to the same domain value normalize to the same tree,
//! which is what `flatten` produces for that value.

use std::collections::BTreeMap;

use super::codec;
use super::config::{ConversionConfig, MalformedScalarPolicy, VariantPolicy};
use super::expand::dropped_variant;
use super::oneof::{self, Resolution};
use crate::error::ExpandErrorKind;
use crate::models::ConfigValue;
use crate::schema::{Cardinality, Field, OneOfSchema, ScalarSchema, SchemaNode, StructSchema};

/// Normalize a tree against a schema; `None` means the node is indistinguishable from absent
///
/// Drops empty lists and sets, nullable integer sentinels, oneof blocks with
/// no populated candidate and fields unknown to the schema. Scalars are
/// re-encoded in their canonical form. Subtrees that would not expand are
/// kept as they are.
pub(crate) fn normalize_node(
    tree: &ConfigValue,
    node: &SchemaNode,
    config: &ConversionConfig,
) -> Option<ConfigValue> {
    match (tree, node) {
        (ConfigValue::Scalar(_), SchemaNode::Scalar(schema)) => normalize_scalar(tree, schema, config),
        (ConfigValue::Block(block), SchemaNode::Struct(schema)) => {
            Some(normalize_struct(block, schema, config))
        }
        (ConfigValue::Block(block), SchemaNode::OneOf(schema)) => normalize_oneof(block, schema, config),
        _ => Some(tree.clone()),
    }
}

fn normalize_scalar(
    tree: &ConfigValue,
    schema: &ScalarSchema,
    config: &ConversionConfig,
) -> Option<ConfigValue> {
    let scalar = tree.as_scalar()?;
    match codec::decode(scalar, schema, config) {
        Ok(Some(leaf)) => Some(
            codec::encode(&leaf, schema)
                .map(ConfigValue::Scalar)
                .unwrap_or_else(|| tree.clone()),
        ),
        Ok(None) => None,
        Err(ExpandErrorKind::MalformedScalar { .. })
            if config.malformed_scalar_policy == MalformedScalarPolicy::Lenient =>
        {
            None
        }
        Err(_) => Some(tree.clone()),
    }
}

fn normalize_struct(
    block: &BTreeMap<String, ConfigValue>,
    schema: &StructSchema,
    config: &ConversionConfig,
) -> ConfigValue {
    let mut out = BTreeMap::new();
    for field in &schema.fields {
        if let Some(value) = block.get(&field.name)
            && let Some(normalized) = normalize_field(value, field, config)
        {
            out.insert(field.name.clone(), normalized);
        }
    }
    ConfigValue::Block(out)
}

fn normalize_oneof(
    block: &BTreeMap<String, ConfigValue>,
    schema: &OneOfSchema,
    config: &ConversionConfig,
) -> Option<ConfigValue> {
    let populated = match oneof::resolve(block, schema) {
        Resolution::Empty => return None,
        Resolution::Single(field, value) => vec![(field, value)],
        Resolution::Ambiguous(mut populated) => {
            if config.variant_policy == VariantPolicy::FirstMatch {
                populated.truncate(1);
            }
            populated
        }
    };

    let out: BTreeMap<String, ConfigValue> = populated
        .into_iter()
        .filter_map(|(field, value)| {
            normalize_field(value, field, config).map(|normalized| (field.name.clone(), normalized))
        })
        .collect();
    if out.is_empty() {
        None
    } else {
        Some(ConfigValue::Block(out))
    }
}

fn normalize_field(value: &ConfigValue, field: &Field, config: &ConversionConfig) -> Option<ConfigValue> {
    match field.cardinality {
        Cardinality::Required | Cardinality::OptionalSingle => {
            if !field.node.is_block() {
                return normalize_node(value, &field.node, config);
            }
            match value {
                ConfigValue::OrderedList(items) if items.is_empty() => None,
                ConfigValue::OrderedList(items) if items.len() == 1 => {
                    normalize_node(&items[0], &field.node, config).map(ConfigValue::single)
                }
                other => Some(other.clone()),
            }
        }
        Cardinality::List { .. } => match value {
            ConfigValue::OrderedList(items) => {
                normalize_elements(items, field, config).map(ConfigValue::OrderedList)
            }
            other => Some(other.clone()),
        },
        Cardinality::Set { .. } => match value {
            ConfigValue::OrderedList(items) | ConfigValue::UnorderedSet(items) => {
                normalize_elements(items, field, config).map(ConfigValue::UnorderedSet)
            }
            other => Some(other.clone()),
        },
    }
}

fn normalize_elements(
    items: &[ConfigValue],
    field: &Field,
    config: &ConversionConfig,
) -> Option<Vec<ConfigValue>> {
    let elements: Vec<ConfigValue> = items
        .iter()
        .filter_map(|item| match normalize_node(item, &field.node, config) {
            Some(normalized) => Some(normalized),
            // an empty oneof element fails expansion, keep it visible
            None => match field.node.as_oneof() {
                Some(schema) if !dropped_variant(item, schema, config) => Some(item.clone()),
                _ => None,
            },
        })
        .collect();
    if elements.is_empty() {
        None
    } else {
        Some(elements)
    }
}
