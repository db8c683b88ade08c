//! `expand` command

use tracing::info;

use super::{ConvertOptions, read_tree, resolve_node};
use crate::catalog::Catalog;
use crate::cli::error::CliError;
use crate::cli::output::render;
use crate::convert::Converter;
use crate::wire::to_wire;

/// Expand a configuration tree; `wire` renders the result in the service shape
pub fn handle_expand(options: &ConvertOptions, input: &str, wire: bool) -> Result<String, CliError> {
    let node = resolve_node(Catalog::global(), &options.node)?;
    let tree = read_tree(input)?;
    let value = Converter::with_config(options.config.clone()).expand(&tree, node)?;
    info!("Expanded {} with {} top-level fields", options.node, value.field_count());

    if wire {
        render(&to_wire(&value, node), options.format)
    } else {
        render(&value, options.format)
    }
}
