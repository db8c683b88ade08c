//! Descriptor construction helpers
//!
//! Scalar constructors return shared nodes; [`StructBuilder`] and
//! [`OneOfBuilder`] assemble blocks from them and can record the result in a
//! [`Registry`] under its type name.

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::node::{Cardinality, Field, OneOfSchema, ScalarKind, ScalarSchema, SchemaNode, StructSchema};

/// Identifier characters accepted by the service for ids of sheets, visuals, filters, ...
pub static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\-]+$").unwrap());

/// Upper-case `#RRGGBB`
pub static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-F]{6}$").unwrap());

/// `#RRGGBB` with optional alpha byte
pub static COLOR_ALPHA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-F]{6}(?:[0-9A-F]{2})?$").unwrap());

/// Alphanumeric parameter names
pub static PARAMETER_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z]+$").unwrap());

fn scalar(schema: ScalarSchema) -> Arc<SchemaNode> {
    Arc::new(SchemaNode::Scalar(schema))
}

pub fn string() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::String))
}

pub fn string_len(min: usize, max: usize) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::String).with_length(min, max))
}

/// String restricted by a regular expression
pub fn pattern(regex: &Regex) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::String).with_pattern(regex))
}

pub fn integer() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Integer))
}

pub fn int_range(min: i64, max: i64) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Integer).with_range(min as f64, max as f64))
}

pub fn float() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Float))
}

pub fn float_range(min: f64, max: f64) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Float).with_range(min, max))
}

pub fn boolean() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Bool))
}

pub fn enumeration(values: &[&str]) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Enum).with_enum_values(values.iter().copied()))
}

pub fn timestamp() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Timestamp))
}

/// Integer carried as a string, with inclusive bounds on the parsed value
pub fn nullable_int(min: i64, max: i64) -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::NullableInt).with_range(min as f64, max as f64))
}

pub fn hex_color() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Color).with_pattern(&COLOR_PATTERN))
}

pub fn hex_color_alpha() -> Arc<SchemaNode> {
    scalar(ScalarSchema::new(ScalarKind::Color).with_pattern(&COLOR_ALPHA_PATTERN))
}

/// Parameter name: 1 to 2048 alphanumeric characters
pub fn parameter_name() -> Arc<SchemaNode> {
    scalar(
        ScalarSchema::new(ScalarKind::String)
            .with_length(1, 2048)
            .with_pattern(&PARAMETER_NAME_PATTERN),
    )
}

/// Service identifier: 1 to 512 word characters or dashes
pub fn id() -> Arc<SchemaNode> {
    scalar(
        ScalarSchema::new(ScalarKind::String)
            .with_length(1, 512)
            .with_pattern(&ID_PATTERN),
    )
}

/// Named node types, keyed by type name
#[derive(Debug, Clone, Default)]
pub struct Registry {
    nodes: BTreeMap<String, Arc<SchemaNode>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node under its type name, replacing any previous entry
    pub fn insert(&mut self, node: Arc<SchemaNode>) -> Arc<SchemaNode> {
        let name = node.name().to_string();
        if self.nodes.insert(name.clone(), Arc::clone(&node)).is_some() {
            tracing::debug!("Replaced schema node {}", name);
        }
        node
    }

    pub fn get(&self, name: &str) -> Option<&Arc<SchemaNode>> {
        self.nodes.get(name)
    }

    /// Registered type names in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builder for struct nodes
#[derive(Debug)]
pub struct StructBuilder {
    name: String,
    fields: Vec<Field>,
}

impl StructBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    fn push(mut self, name: &str, node: &Arc<SchemaNode>, cardinality: Cardinality) -> Self {
        self.fields
            .push(Field::new(name, Arc::clone(node), cardinality));
        self
    }

    pub fn required(self, name: &str, node: &Arc<SchemaNode>) -> Self {
        self.push(name, node, Cardinality::Required)
    }

    pub fn optional(self, name: &str, node: &Arc<SchemaNode>) -> Self {
        self.push(name, node, Cardinality::OptionalSingle)
    }

    pub fn list(self, name: &str, node: &Arc<SchemaNode>, min: usize, max: usize) -> Self {
        self.push(name, node, Cardinality::List { min, max })
    }

    pub fn set(self, name: &str, node: &Arc<SchemaNode>, min: usize, max: usize) -> Self {
        self.push(name, node, Cardinality::Set { min, max })
    }

    /// Override the wire member name of the most recently added field
    pub fn wire(mut self, wire_name: &str) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.wire_name = Some(wire_name.to_string());
        }
        self
    }

    pub fn build(self) -> Arc<SchemaNode> {
        Arc::new(SchemaNode::Struct(StructSchema {
            name: self.name,
            fields: self.fields,
        }))
    }

    /// Build and record in `registry`
    pub fn register(self, registry: &mut Registry) -> Arc<SchemaNode> {
        registry.insert(self.build())
    }
}

/// Builder for oneof groups; candidates keep the order they are added in
#[derive(Debug)]
pub struct OneOfBuilder {
    name: String,
    variants: Vec<Field>,
}

impl OneOfBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, name: &str, node: &Arc<SchemaNode>) -> Self {
        self.variants
            .push(Field::new(name, Arc::clone(node), Cardinality::OptionalSingle));
        self
    }

    /// A candidate carrying an ordered list
    pub fn variant_list(mut self, name: &str, node: &Arc<SchemaNode>, min: usize, max: usize) -> Self {
        self.variants
            .push(Field::new(name, Arc::clone(node), Cardinality::List { min, max }));
        self
    }

    pub fn wire(mut self, wire_name: &str) -> Self {
        if let Some(field) = self.variants.last_mut() {
            field.wire_name = Some(wire_name.to_string());
        }
        self
    }

    pub fn build(self) -> Arc<SchemaNode> {
        Arc::new(SchemaNode::OneOf(OneOfSchema {
            name: self.name,
            variants: self.variants,
        }))
    }

    pub fn register(self, registry: &mut Registry) -> Arc<SchemaNode> {
        registry.insert(self.build())
    }
}
