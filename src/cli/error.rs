//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ExpandError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown node type {0:?}")]
    UnknownNode(String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Invalid conversion config: {0}")]
    ConfigError(String),

    #[error("Conversion failed at {0}")]
    Conversion(#[from] ExpandError),

    #[error("Failed to write output: {0}")]
    OutputError(String),
}
