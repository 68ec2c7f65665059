//! docstring-renderer CLI.
//!
//! Prints the shortest declared name in a Python file that contains the
//! keyword, or lists every declared name with `--list`.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use docstring_renderer::cli::{Cli, OutputFormat};
use docstring_renderer::{AstExtractor, KeywordLocator};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v; logs go to stderr, stdout carries results only
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        cmd_list(&cli)
    } else {
        cmd_find(&cli)
    }
}

fn cmd_find(cli: &Cli) -> Result<()> {
    let keyword = cli.keyword.clone().unwrap_or_default();
    let locator = KeywordLocator::new(&cli.file_path, keyword)
        .with_context(|| format!("Failed to analyze {}", cli.file_path.display()))?;
    let found = locator.find_match()?;

    match cli.format {
        OutputFormat::Text => println!("{}", found.name),
        OutputFormat::Json => {
            let out = json!({
                "file": cli.file_path.display().to_string(),
                "keyword": locator.keyword(),
                "name": found.name,
                "kind": found.kind,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn cmd_list(cli: &Cli) -> Result<()> {
    let extractor = AstExtractor::from_file(&cli.file_path)
        .with_context(|| format!("Failed to analyze {}", cli.file_path.display()))?;

    match cli.format {
        OutputFormat::Text => {
            for (kind, name) in extractor.declarations() {
                println!("{}\t{}", kind, name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&extractor.listing())?);
        }
    }
    Ok(())
}
