//! `check` command

use super::{ConvertOptions, read_tree, resolve_node};
use crate::catalog::Catalog;
use crate::cli::error::CliError;
use crate::convert::Converter;

/// Expand without printing the result
///
/// A failure is returned as [`CliError::Conversion`], whose message carries the
/// failing field path; the binary prints it once.
pub fn handle_check(options: &ConvertOptions, input: &str) -> Result<String, CliError> {
    let node = resolve_node(Catalog::global(), &options.node)?;
    let tree = read_tree(input)?;
    Converter::with_config(options.config.clone()).expand(&tree, node)?;
    Ok(format!("✅ {} is valid\n", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ConvertOptions {
        ConvertOptions {
            node: "GridLayoutElement".to_string(),
            ..Default::default()
        }
    }

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_check_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            &dir,
            "element.yaml",
            "column_span: 12\nelement_id: e1\nelement_type: VISUAL\nrow_span: 6\nrow_index: \"3\"\n",
        );
        let output = handle_check(&options(), &input).unwrap();
        assert!(output.starts_with("✅"));
    }

    #[test]
    fn test_check_reports_path_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            &dir,
            "element.yaml",
            "column_span: 12\nelement_id: e1\nelement_type: VISUAL\nrow_span: 6\nrow_index: abc\n",
        );
        match handle_check(&options(), &input) {
            Err(e @ CliError::Conversion(_)) => {
                let message = e.to_string();
                assert!(message.contains("row_index"), "{}", message);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
