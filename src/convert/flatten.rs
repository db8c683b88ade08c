//! Flatten engine: domain object graph to configuration tree
//!
//! Flatten is total. A value that does not match its schema is flattened
//! without schema guidance and a warning is logged.

use std::collections::BTreeMap;

use tracing::warn;

use super::codec;
use crate::models::{ConfigValue, DomainValue, Leaf};
use crate::schema::{Cardinality, Field, OneOfSchema, ScalarSchema, SchemaNode, StructSchema};

pub(crate) fn flatten_node(value: &DomainValue, node: &SchemaNode) -> ConfigValue {
    match (value, node) {
        (DomainValue::Leaf(leaf), SchemaNode::Scalar(schema)) => flatten_leaf(leaf, schema),
        (DomainValue::Struct(fields), SchemaNode::Struct(schema)) => flatten_struct(fields, schema),
        (DomainValue::Variant(tag, payload), SchemaNode::OneOf(schema)) => {
            flatten_variant(tag, payload, schema)
        }
        (value, node) => {
            warn!(
                "Flattening {} value without schema guidance: expected {}",
                value.kind_name(),
                node.name()
            );
            untyped(value)
        }
    }
}

fn flatten_leaf(leaf: &Leaf, schema: &ScalarSchema) -> ConfigValue {
    match codec::encode(leaf, schema) {
        Some(scalar) => ConfigValue::Scalar(scalar),
        None => {
            warn!(
                "Flattening {} leaf into {} field without conversion",
                leaf.kind_name(),
                schema.kind.name()
            );
            ConfigValue::Scalar(codec::encode_untyped(leaf))
        }
    }
}

fn flatten_struct(fields: &BTreeMap<String, DomainValue>, schema: &StructSchema) -> ConfigValue {
    let mut block = BTreeMap::new();
    for (name, value) in fields {
        match schema.field(name) {
            Some(field) => {
                if let Some(flat) = flatten_field(value, field) {
                    block.insert(name.clone(), flat);
                }
            }
            None => warn!("Dropping field {:?} unknown to {}", name, schema.name),
        }
    }
    ConfigValue::Block(block)
}

fn flatten_variant(tag: &str, payload: &DomainValue, schema: &OneOfSchema) -> ConfigValue {
    let mut block = BTreeMap::new();
    match schema.variant(tag) {
        Some(field) => {
            if let Some(flat) = flatten_field(payload, field) {
                block.insert(tag.to_string(), flat);
            }
        }
        None => {
            warn!("Variant {:?} is not a candidate of {}", tag, schema.name);
            block.insert(tag.to_string(), wrap_untyped(payload));
        }
    }
    ConfigValue::Block(block)
}

/// Flatten a field value per its cardinality; `None` means the field is omitted
fn flatten_field(value: &DomainValue, field: &Field) -> Option<ConfigValue> {
    match field.cardinality {
        Cardinality::Required | Cardinality::OptionalSingle => {
            if let DomainValue::Sequence(_) = value {
                warn!("Field {:?} is singular but holds a sequence", field.name);
                return Some(untyped(value));
            }
            let flat = flatten_node(value, &field.node);
            if field.node.is_block() {
                Some(ConfigValue::single(flat))
            } else {
                Some(flat)
            }
        }
        Cardinality::List { .. } | Cardinality::Set { .. } => {
            let elements: Vec<ConfigValue> = match value {
                DomainValue::Sequence(items) => items
                    .iter()
                    .map(|item| flatten_node(item, &field.node))
                    .collect(),
                single => {
                    warn!("Field {:?} is repeated but holds a single {}", field.name, single.kind_name());
                    vec![flatten_node(single, &field.node)]
                }
            };
            if elements.is_empty() {
                None
            } else if matches!(field.cardinality, Cardinality::Set { .. }) {
                Some(ConfigValue::UnorderedSet(elements))
            } else {
                Some(ConfigValue::OrderedList(elements))
            }
        }
    }
}

fn untyped(value: &DomainValue) -> ConfigValue {
    match value {
        DomainValue::Leaf(leaf) => ConfigValue::Scalar(codec::encode_untyped(leaf)),
        DomainValue::Struct(fields) => ConfigValue::Block(
            fields
                .iter()
                .map(|(name, value)| (name.clone(), wrap_untyped(value)))
                .collect(),
        ),
        DomainValue::Sequence(items) => ConfigValue::OrderedList(items.iter().map(untyped).collect()),
        DomainValue::Variant(tag, payload) => {
            ConfigValue::block().with(tag.clone(), wrap_untyped(payload))
        }
    }
}

/// Blocks nested in a block travel as one-element lists
fn wrap_untyped(value: &DomainValue) -> ConfigValue {
    match value {
        DomainValue::Struct(_) | DomainValue::Variant(..) => ConfigValue::single(untyped(value)),
        _ => untyped(value),
    }
}
