//! Expand engine: configuration tree to domain object graph

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::codec;
use super::config::{ConversionConfig, MalformedScalarPolicy, VariantPolicy};
use super::oneof::{self, Resolution};
use crate::error::{ExpandError, ExpandErrorKind, ExpandResult, FieldPath, PathSegment};
use crate::models::{ConfigValue, DomainValue};
use crate::schema::{Cardinality, Field, OneOfSchema, ScalarSchema, SchemaNode, StructSchema};
use crate::validation::{check_cardinality, check_scalar};

/// Recursive-descent expander for a single conversion
///
/// Tracks the current field path so that errors and warnings point at the
/// offending node.
pub(crate) struct Expander<'c> {
    config: &'c ConversionConfig,
    path: Vec<PathSegment>,
    depth: usize,
}

impl<'c> Expander<'c> {
    pub(crate) fn new(config: &'c ConversionConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            depth: 0,
        }
    }

    /// Expand a root node; the root must resolve to a value
    pub(crate) fn expand_root(&mut self, tree: &ConfigValue, node: &SchemaNode) -> ExpandResult<DomainValue> {
        debug!("Expanding {}", node.name());
        match self.expand_node(tree, node)? {
            Some(value) => Ok(value),
            None => Err(self.error(absent_kind(node, node.name()))),
        }
    }

    fn current_path(&self) -> FieldPath {
        FieldPath::from_segments(self.path.clone())
    }

    fn error(&self, kind: ExpandErrorKind) -> ExpandError {
        ExpandError {
            path: self.current_path(),
            kind,
        }
    }

    fn expand_node(&mut self, tree: &ConfigValue, node: &SchemaNode) -> ExpandResult<Option<DomainValue>> {
        match node {
            SchemaNode::Scalar(schema) => self.expand_scalar(tree, schema),
            SchemaNode::Struct(schema) => {
                self.descend()?;
                let value = self.expand_struct(tree, schema)?;
                self.depth -= 1;
                Ok(Some(value))
            }
            SchemaNode::OneOf(schema) => {
                self.descend()?;
                let value = self.expand_oneof(tree, schema)?;
                self.depth -= 1;
                Ok(value)
            }
        }
    }

    fn descend(&mut self) -> ExpandResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(self.error(ExpandErrorKind::MaxDepthExceeded {
                depth: self.depth,
                max: self.config.max_depth,
            }));
        }
        Ok(())
    }

    fn expand_scalar(&mut self, tree: &ConfigValue, schema: &ScalarSchema) -> ExpandResult<Option<DomainValue>> {
        let scalar = match tree {
            ConfigValue::Scalar(scalar) => scalar,
            other => {
                return Err(self.error(ExpandErrorKind::TypeMismatch {
                    expected: schema.kind.name(),
                    found: other.kind_name(),
                }));
            }
        };

        match codec::decode(scalar, schema, self.config) {
            Ok(Some(leaf)) => {
                if self.config.validate_constraints {
                    check_scalar(scalar, schema).map_err(|kind| self.error(kind))?;
                }
                Ok(Some(DomainValue::Leaf(leaf)))
            }
            Ok(None) => Ok(None),
            Err(kind @ ExpandErrorKind::MalformedScalar { .. })
                if self.config.malformed_scalar_policy == MalformedScalarPolicy::Lenient =>
            {
                warn!("{}: {}; value dropped", self.current_path(), kind);
                Ok(None)
            }
            Err(kind) => Err(self.error(kind)),
        }
    }

    fn expand_struct(&mut self, tree: &ConfigValue, schema: &StructSchema) -> ExpandResult<DomainValue> {
        let block = self.block(tree)?;
        for key in block.keys() {
            if schema.field(key).is_none() {
                debug!("{}: ignoring unknown field {:?} of {}", self.current_path(), key, schema.name);
            }
        }

        let mut fields = BTreeMap::new();
        for field in &schema.fields {
            self.path.push(PathSegment::Field(field.name.clone()));
            let value = match block.get(&field.name) {
                Some(value) => {
                    trace!("{}", self.current_path());
                    self.expand_field(value, field)?
                }
                // an absent repeated field has zero elements
                None if self.config.enforce_cardinality && field.cardinality.is_repeated() => {
                    check_cardinality(0, field.cardinality).map_err(|kind| self.error(kind))?;
                    None
                }
                None => None,
            };
            match value {
                Some(value) => {
                    fields.insert(field.name.clone(), value);
                }
                None if field.is_required() => {
                    return Err(self.error(ExpandErrorKind::MissingRequiredField {
                        field: field.name.clone(),
                    }));
                }
                None => {}
            }
            self.path.pop();
        }
        Ok(DomainValue::Struct(fields))
    }

    fn expand_oneof(&mut self, tree: &ConfigValue, schema: &OneOfSchema) -> ExpandResult<Option<DomainValue>> {
        let block = self.block(tree)?;
        for key in block.keys() {
            if schema.variant(key).is_none() {
                debug!("{}: ignoring unknown field {:?} of {}", self.current_path(), key, schema.name);
            }
        }

        let (field, value) = match oneof::resolve(block, schema) {
            Resolution::Empty => return Ok(None),
            Resolution::Single(field, value) => (field, value),
            Resolution::Ambiguous(populated) => {
                let names: Vec<String> = populated.iter().map(|(f, _)| f.name.clone()).collect();
                match self.config.variant_policy {
                    VariantPolicy::Strict => {
                        return Err(self.error(ExpandErrorKind::AmbiguousVariant { populated: names }));
                    }
                    VariantPolicy::FirstMatch => {
                        warn!(
                            "{}: several variants of {} are set [{}], using {}",
                            self.current_path(),
                            schema.name,
                            names.join(", "),
                            names[0]
                        );
                        populated[0]
                    }
                }
            }
        };

        self.path.push(PathSegment::Field(field.name.clone()));
        let payload = self.expand_field(value, field)?;
        self.path.pop();
        Ok(payload.map(|payload| DomainValue::Variant(field.name.clone(), Box::new(payload))))
    }

    fn expand_field(&mut self, value: &ConfigValue, field: &Field) -> ExpandResult<Option<DomainValue>> {
        match field.cardinality {
            Cardinality::Required | Cardinality::OptionalSingle => {
                if !field.node.is_block() {
                    return self.expand_node(value, &field.node);
                }
                let items = match value {
                    ConfigValue::OrderedList(items) => items,
                    other => {
                        return Err(self.error(ExpandErrorKind::TypeMismatch {
                            expected: "list",
                            found: other.kind_name(),
                        }));
                    }
                };
                check_cardinality(items.len(), field.cardinality).map_err(|kind| self.error(kind))?;
                match items.first() {
                    Some(item) => {
                        let expanded = self.expand_node(item, &field.node)?;
                        if expanded.is_none() && field.is_required() {
                            return Err(self.error(absent_kind(&field.node, &field.name)));
                        }
                        Ok(expanded)
                    }
                    None => Ok(None),
                }
            }
            Cardinality::List { .. } => match value {
                ConfigValue::OrderedList(items) => self.expand_elements(items, field),
                other => Err(self.error(ExpandErrorKind::TypeMismatch {
                    expected: "list",
                    found: other.kind_name(),
                })),
            },
            Cardinality::Set { .. } => match value {
                ConfigValue::UnorderedSet(items) | ConfigValue::OrderedList(items) => {
                    self.expand_elements(items, field)
                }
                other => Err(self.error(ExpandErrorKind::TypeMismatch {
                    expected: "set",
                    found: other.kind_name(),
                })),
            },
        }
    }

    fn expand_elements(&mut self, items: &[ConfigValue], field: &Field) -> ExpandResult<Option<DomainValue>> {
        if self.config.enforce_cardinality {
            check_cardinality(items.len(), field.cardinality).map_err(|kind| self.error(kind))?;
        }

        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push(PathSegment::Index(index));
            match self.expand_node(item, &field.node)? {
                Some(value) => elements.push(value),
                None => {
                    if let Some(schema) = field.node.as_oneof() {
                        if dropped_variant(item, schema, self.config) {
                            warn!(
                                "{}: variant payload of {} was dropped; element skipped",
                                self.current_path(),
                                schema.name
                            );
                        } else {
                            return Err(self.error(ExpandErrorKind::EmptyVariant {
                                candidates: schema.candidate_names(),
                            }));
                        }
                    }
                }
            }
            self.path.pop();
        }

        if elements.is_empty() {
            Ok(None)
        } else {
            Ok(Some(DomainValue::Sequence(elements)))
        }
    }

    fn block<'t>(&self, tree: &'t ConfigValue) -> ExpandResult<&'t BTreeMap<String, ConfigValue>> {
        match tree {
            ConfigValue::Block(block) => Ok(block),
            other => Err(self.error(ExpandErrorKind::TypeMismatch {
                expected: "block",
                found: other.kind_name(),
            })),
        }
    }
}

/// Whether a oneof element resolved to nothing only because the lenient policy
/// dropped the payload of a populated candidate
pub(crate) fn dropped_variant(
    item: &ConfigValue,
    schema: &OneOfSchema,
    config: &ConversionConfig,
) -> bool {
    config.malformed_scalar_policy == MalformedScalarPolicy::Lenient
        && item
            .as_block()
            .is_some_and(|block| !matches!(oneof::resolve(block, schema), Resolution::Empty))
}

/// Error for a node that is required but resolved to nothing
fn absent_kind(node: &SchemaNode, field: &str) -> ExpandErrorKind {
    match node {
        SchemaNode::OneOf(schema) => ExpandErrorKind::EmptyVariant {
            candidates: schema.candidate_names(),
        },
        _ => ExpandErrorKind::MissingRequiredField {
            field: field.to_string(),
        },
    }
}
