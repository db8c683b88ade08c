//! Conversion engine
//!
//! Generic, schema-driven conversion between configuration trees and domain
//! object graphs:
//! - [`expand`]: tree to domain value, failing with a path-carrying [`ExpandError`]
//! - [`flatten`]: domain value to tree, total
//! - [`normalize`]: canonical tree form, `flatten(expand(t)) == normalize(t)`
//!
//! [`ExpandError`]: crate::error::ExpandError

pub mod codec;
pub mod config;
mod expand;
mod flatten;
mod normalize;
pub mod oneof;

pub use config::{ConversionConfig, ConversionConfigBuilder, MalformedScalarPolicy, VariantPolicy};

use crate::error::ExpandResult;
use crate::models::{ConfigValue, DomainValue};
use crate::schema::SchemaNode;

/// Converter holding a [`ConversionConfig`]
///
/// Converters hold no per-conversion state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a converter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Expand a configuration tree into a domain value
    ///
    /// # Example
    ///
    /// ```rust
    /// use analysis_definition_sdk::convert::Converter;
    /// use analysis_definition_sdk::models::{ConfigValue, DomainValue};
    /// use analysis_definition_sdk::schema::StructBuilder;
    /// use analysis_definition_sdk::schema::builder::string;
    ///
    /// let node = StructBuilder::new("Label").optional("text", &string()).build();
    /// let tree = ConfigValue::block().with("text", ConfigValue::string("Sales"));
    ///
    /// let value = Converter::new().expand(&tree, &node).unwrap();
    /// assert_eq!(value.get("text"), Some(&DomainValue::string("Sales")));
    /// ```
    pub fn expand(&self, tree: &ConfigValue, node: &SchemaNode) -> ExpandResult<DomainValue> {
        expand::Expander::new(&self.config).expand_root(tree, node)
    }

    /// Flatten a domain value into a configuration tree
    pub fn flatten(&self, value: &DomainValue, node: &SchemaNode) -> ConfigValue {
        tracing::debug!("Flattening {}", node.name());
        flatten::flatten_node(value, node)
    }

    /// Canonical form of a configuration tree
    pub fn normalize(&self, tree: &ConfigValue, node: &SchemaNode) -> ConfigValue {
        normalize::normalize_node(tree, node, &self.config).unwrap_or_else(|| {
            if node.is_block() {
                ConfigValue::block()
            } else {
                tree.clone()
            }
        })
    }
}

/// Expand with the default configuration
pub fn expand(tree: &ConfigValue, node: &SchemaNode) -> ExpandResult<DomainValue> {
    Converter::new().expand(tree, node)
}

/// Flatten a domain value; never fails
pub fn flatten(value: &DomainValue, node: &SchemaNode) -> ConfigValue {
    flatten::flatten_node(value, node)
}

/// Normalize with the default configuration
pub fn normalize(tree: &ConfigValue, node: &SchemaNode) -> ConfigValue {
    Converter::new().normalize(tree, node)
}
