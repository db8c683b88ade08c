//! `nodes` command

use super::resolve_node;
use crate::catalog::Catalog;
use crate::cli::error::CliError;
use crate::cli::output::format_node;

/// List node types, or describe one
pub fn handle_nodes(name: Option<&str>) -> Result<String, CliError> {
    let catalog = Catalog::global();
    match name {
        Some(name) => Ok(format_node(resolve_node(catalog, name)?)),
        None => {
            let mut output = String::new();
            for name in catalog.node_names() {
                output.push_str(name);
                output.push('\n');
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_nodes_unknown() {
        assert!(matches!(
            handle_nodes(Some("NoSuchNode")),
            Err(CliError::UnknownNode(_))
        ));
        let listing = handle_nodes(None).unwrap();
        assert!(listing.lines().any(|l| l == "AnalysisDefinition"));
    }
}
