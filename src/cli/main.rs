//! definition-cli: expand, flatten and check analysis definitions

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use analysis_definition_sdk::cli::commands::{
    ConvertOptions, handle_check, handle_expand, handle_flatten, handle_nodes, load_config,
};
use analysis_definition_sdk::cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "definition-cli")]
#[command(about = "Convert analysis definitions between configuration trees and the service shape", long_about = None)]
struct Cli {
    /// TOML file with conversion settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use permissive settings: first populated variant wins, malformed scalars are dropped
    #[arg(long, global = true)]
    compatible: bool,

    /// Output format (json or yaml)
    #[arg(short, long, global = true, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List node types, or describe one
    Nodes { name: Option<String> },
    /// Expand a configuration tree into a domain value
    Expand {
        /// Node type of the document root
        #[arg(short, long, default_value = "AnalysisDefinition")]
        node: String,
        /// Render the service wire shape instead of the domain value
        #[arg(long)]
        wire: bool,
        /// Input file, or - for stdin
        input: String,
    },
    /// Flatten a wire document into a configuration tree
    Flatten {
        #[arg(short, long, default_value = "AnalysisDefinition")]
        node: String,
        /// Input is a serialized domain value rather than a wire document
        #[arg(long)]
        domain: bool,
        input: String,
    },
    /// Check that a configuration tree expands cleanly
    Check {
        #[arg(short, long, default_value = "AnalysisDefinition")]
        node: String,
        input: String,
    },
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = load_config(cli.config.as_deref(), cli.compatible)
        .context("Failed to load conversion config")?;
    let options = |node: String| ConvertOptions {
        node,
        config: config.clone(),
        format: cli.format,
    };

    let output = match cli.command {
        Commands::Nodes { name } => handle_nodes(name.as_deref())?,
        Commands::Expand { node, wire, input } => handle_expand(&options(node), &input, wire)?,
        Commands::Flatten { node, domain, input } => {
            handle_flatten(&options(node), &input, domain)?
        }
        Commands::Check { node, input } => handle_check(&options(node), &input)?,
    };
    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
