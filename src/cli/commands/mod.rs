//! Command implementations
//!
//! Each command returns its rendered output so the binary only has to print it.

mod check;
mod expand;
mod flatten;
mod nodes;

pub use check::handle_check;
pub use expand::handle_expand;
pub use flatten::handle_flatten;
pub use nodes::handle_nodes;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::error::CliError;
use crate::cli::output::OutputFormat;
use crate::convert::ConversionConfig;
use crate::models::ConfigValue;
use crate::schema::SchemaNode;

/// Settings shared by the conversion commands
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Catalog type name the input is converted against
    pub node: String,
    pub config: ConversionConfig,
    pub format: OutputFormat,
}

/// Load input content from file or stdin
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Parse a JSON or YAML document
///
/// YAML is a superset of JSON, so anything not explicitly `.json` goes
/// through the YAML parser.
pub fn parse_document(content: &str, source: &str) -> Result<Value, CliError> {
    if source.ends_with(".json") {
        serde_json::from_str(content).map_err(|e| CliError::ParseError(e.to_string()))
    } else {
        serde_yaml::from_str(content).map_err(|e| CliError::ParseError(e.to_string()))
    }
}

/// Read a conversion config from a TOML file
pub fn load_config(path: Option<&Path>, compatible: bool) -> Result<ConversionConfig, CliError> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
            toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))?
        }
        None if compatible => ConversionConfig::compatible(),
        None => ConversionConfig::default(),
    };
    debug!("Using conversion config {:?}", config);
    Ok(config)
}

fn resolve_node<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Arc<SchemaNode>, CliError> {
    catalog
        .node(name)
        .ok_or_else(|| CliError::UnknownNode(name.to_string()))
}

/// Configuration tree of a parsed document; an empty or `null` document is an error
fn tree_from_document(document: &Value, source: &str) -> Result<ConfigValue, CliError> {
    ConfigValue::from_json(document)
        .ok_or_else(|| CliError::ParseError(format!("{} is empty", source)))
}

fn read_tree(input: &str) -> Result<ConfigValue, CliError> {
    let document = parse_document(&load_input(input)?, input)?;
    tree_from_document(&document, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_yaml_and_json() {
        let yaml = parse_document("name: Sales\n", "analysis.yaml").unwrap();
        assert_eq!(yaml["name"], "Sales");
        let json = parse_document(r#"{"name": "Sales"}"#, "analysis.json").unwrap();
        assert_eq!(json, yaml);
        assert!(parse_document("{", "analysis.json").is_err());
    }

    #[test]
    fn test_empty_document_is_rejected() {
        for (content, source) in [("", "analysis.yaml"), ("null", "analysis.json"), ("~\n", "analysis.yaml")] {
            let result = parse_document(content, source).and_then(|document| tree_from_document(&document, source));
            assert!(matches!(result, Err(CliError::ParseError(_))), "{:?}", result);
        }
        let document = parse_document("{}", "analysis.json").unwrap();
        assert_eq!(tree_from_document(&document, "analysis.json").unwrap(), ConfigValue::block());
    }

    #[test]
    fn test_read_tree_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.yaml");
        std::fs::write(&empty, "").unwrap();
        assert!(matches!(
            read_tree(empty.to_str().unwrap()),
            Err(CliError::ParseError(_))
        ));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            read_tree(missing.to_str().unwrap()),
            Err(CliError::FileReadError(..))
        ));
    }

    #[test]
    fn test_load_config_defaults() {
        assert_eq!(load_config(None, false).unwrap(), ConversionConfig::default());
        assert_eq!(load_config(None, true).unwrap(), ConversionConfig::compatible());
    }
}
