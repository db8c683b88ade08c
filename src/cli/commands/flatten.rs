//! `flatten` command

use super::{ConvertOptions, load_input, parse_document, resolve_node};
use crate::catalog::Catalog;
use crate::cli::error::CliError;
use crate::cli::output::render;
use crate::convert::Converter;
use crate::models::DomainValue;
use crate::wire::from_wire;

/// Flatten a wire document, or a serialized domain value, into a configuration tree
pub fn handle_flatten(options: &ConvertOptions, input: &str, domain: bool) -> Result<String, CliError> {
    let node = resolve_node(Catalog::global(), &options.node)?;
    let document = parse_document(&load_input(input)?, input)?;
    let value = if domain {
        serde_json::from_value::<DomainValue>(document)
            .map_err(|e| CliError::ParseError(e.to_string()))?
    } else {
        from_wire(&document, node)?
    };
    let tree = Converter::with_config(options.config.clone()).flatten(&value, node);
    render(&tree, options.format)
}
