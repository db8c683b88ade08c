//! Node catalog for analysis, template and data set definitions
//!
//! Every node type is registered under its service type name, e.g.
//! `AnalysisDefinition`, `Visual`, `GridLayoutElement`. Sub-descriptors are
//! shared: the `ColumnIdentifier` node reached through a filter is the same
//! allocation as the one reached through a sort.
//!
//! ```rust
//! use analysis_definition_sdk::catalog::Catalog;
//!
//! let catalog = Catalog::global();
//! let visual = catalog.node("Visual").unwrap();
//! assert_eq!(visual.as_oneof().unwrap().variants.len(), 23);
//! ```

mod chart;
mod common;
mod control;
mod data_set;
mod definition;
pub mod enums;
mod filter;
mod format;
mod layout;
mod parameter;
mod sheet;
mod table;
mod visual;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::schema::{Registry, SchemaNode};

pub(crate) type Node = Arc<SchemaNode>;

/// Type names of the definitions a conversion usually starts from
pub const ROOT_NODES: &[&str] = &[
    "AnalysisDefinition",
    "DataSetDefinition",
    "TemplateSourceEntity",
    "TemplateVersionDefinition",
];

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::new);

/// Immutable registry of every node type
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: Registry,
}

impl Catalog {
    /// Build the full catalog
    ///
    /// Construction is deterministic; prefer [`Catalog::global`] unless an
    /// independent instance is needed.
    pub fn new() -> Self {
        let mut reg = Registry::new();

        let common = common::Common::build(&mut reg);
        let formats = format::Formats::build(&mut reg, &common);
        let controls = control::Controls::build(&mut reg, &common);
        let filter_group = filter::build(&mut reg, &common, &controls);
        let parameter_declaration = parameter::build(&mut reg, &common);
        let layouts = layout::Layouts::build(&mut reg, &common);
        let parts = chart::ChartParts::build(&mut reg, &common, &formats);
        let visual = visual::build(&mut reg, &common, &formats, &parts);
        let sheet = sheet::build(&mut reg, &common, &controls, &layouts, &visual);

        definition::build(
            &mut reg,
            &definition::DefinitionParts {
                common: &common,
                formats: &formats,
                parameter_declaration: &parameter_declaration,
                filter_group: &filter_group,
                sheet: &sheet,
                analysis_defaults: &layouts.analysis_defaults,
            },
        );
        data_set::build(&mut reg, &common);

        tracing::debug!("Built node catalog with {} types", reg.len());
        Self { registry: reg }
    }

    /// The process-wide catalog, built on first use
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Look up a node type by name
    pub fn node(&self, name: &str) -> Option<&Arc<SchemaNode>> {
        self.registry.get(name)
    }

    /// Registered type names in lexical order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn analysis_definition(&self) -> Option<&Arc<SchemaNode>> {
        self.node("AnalysisDefinition")
    }

    pub fn data_set_definition(&self) -> Option<&Arc<SchemaNode>> {
        self.node("DataSetDefinition")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_registered() {
        let catalog = Catalog::new();
        for name in ROOT_NODES {
            assert!(catalog.node(name).is_some(), "missing {}", name);
        }
        assert!(catalog.len() > 150);
    }

    #[test]
    fn test_shared_column_identifier() {
        let catalog = Catalog::new();
        let column = catalog.node("ColumnIdentifier").unwrap();
        let filter = catalog.node("CategoryFilter").unwrap();
        let via_filter = &filter.as_struct().unwrap().field("column").unwrap().node;
        assert!(Arc::ptr_eq(column, via_filter));
    }

    #[test]
    fn test_global_is_memoized() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }
}
