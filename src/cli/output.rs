//! Output formatting for CLI

use serde::Serialize;

use crate::cli::error::CliError;
use crate::schema::{Cardinality, Field, SchemaNode};

/// Serialization format of command output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

/// Render any serializable value
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| CliError::OutputError(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CliError::OutputError(e.to_string()))
        }
    }
}

fn cardinality_label(cardinality: Cardinality) -> String {
    match cardinality {
        Cardinality::Required => "required".to_string(),
        Cardinality::OptionalSingle => "optional".to_string(),
        Cardinality::List { min, max } => format!("list[{}..{}]", min, max),
        Cardinality::Set { min, max } => format!("set[{}..{}]", min, max),
    }
}

fn field_line(field: &Field) -> String {
    format!(
        "  - {} ({}, {}) -> {}\n",
        field.name,
        field.node.name(),
        cardinality_label(field.cardinality),
        field.wire_name()
    )
}

/// Describe a node type: its kind, fields or candidates, and wire names
pub fn format_node(node: &SchemaNode) -> String {
    let mut output = String::new();
    match node {
        SchemaNode::Scalar(scalar) => {
            output.push_str(&format!("{} scalar\n", scalar.kind.name()));
            let constraints = &scalar.constraints;
            if !constraints.enum_values.is_empty() {
                output.push_str(&format!("  Values: {}\n", constraints.enum_values.join(", ")));
            }
            if let Some((min, max)) = constraints.length {
                output.push_str(&format!("  Length: {}..{}\n", min, max));
            }
            if let Some((min, max)) = constraints.range {
                output.push_str(&format!("  Range: {}..{}\n", min, max));
            }
            if let Some(pattern) = &constraints.pattern {
                output.push_str(&format!("  Pattern: {}\n", pattern.as_str()));
            }
        }
        SchemaNode::Struct(schema) => {
            output.push_str(&format!("{} (struct, {} fields)\n", schema.name, schema.fields.len()));
            for field in &schema.fields {
                output.push_str(&field_line(field));
            }
        }
        SchemaNode::OneOf(schema) => {
            output.push_str(&format!(
                "{} (one of {} candidates)\n",
                schema.name,
                schema.variants.len()
            ));
            for field in &schema.variants {
                output.push_str(&field_line(field));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_format_node_lists_candidates() {
        let catalog = Catalog::global();
        let text = format_node(catalog.node("Visual").unwrap());
        assert!(text.starts_with("Visual (one of 23 candidates)"));
        assert!(text.contains("kpi_visual (KPIVisual, optional) -> KPIVisual"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
