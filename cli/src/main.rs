#![deny(missing_docs)]

//! # TsGen CLI
//!
//! Command Line Interface for the OpenAPI -> TypeScript client generator.
//!
//! Supported Commands:
//! - `generate`: Load an OpenAPI document and emit the TypeScript client.
//! - `print`: Load an OpenAPI document and dump the parsed spec as YAML.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tsgen_core::{format_typescript_client, load_api_document, AppResult};

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI -> TypeScript client generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the TypeScript client from an OpenAPI specification.
    Generate(GenerateArgs),
    /// Parse the specification and print it back as YAML.
    Print(PrintArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// The path to the OpenAPI specification file.
    #[arg(short, long)]
    input: PathBuf,

    /// The path to the output file. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PrintArgs {
    /// The path to the OpenAPI specification file.
    #[arg(short, long)]
    input: PathBuf,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            let document = load_api_document(&args.input)?;
            let client = format_typescript_client(&document);

            match &args.output {
                Some(path) => {
                    fs::write(path, client)?;
                    tracing::info!(output = %path.display(), "client written");
                }
                None => println!("{}", client),
            }
        }
        Commands::Print(args) => {
            let document = load_api_document(&args.input)?;
            println!("{}", document.to_yaml()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_from_file() {
        let spec = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /ping:
    get:
      operationId: ping
"#;
        let dir = tempfile::tempdir().unwrap();
        let spec_path = dir.path().join("openapi.yml");
        fs::write(&spec_path, spec).unwrap();

        let document = load_api_document(&spec_path).unwrap();
        let client = format_typescript_client(&document);

        assert!(client.contains("async ping(params?: PingParams): Promise<unknown> {"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");

        assert!(load_api_document(&missing).is_err());
    }
}
