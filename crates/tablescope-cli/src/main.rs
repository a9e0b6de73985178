//! Tablescope CLI - metadata catalog browser

use tablescope_cli::cli;
use tablescope_cli::commands::{self, Outcome};
use tablescope_cli::config::resolve_config;
use tablescope_cli::logging::init_logging;
use tablescope_cli::output;
use tablescope_cli::source::open_catalog;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tablescope_core::{CatalogConfig, CatalogDocument};
use tracing::debug;

use cli::{Args, Command, OutputFormat, SchemaDocument};

/// The requested schema or table does not exist.
const EXIT_NOT_FOUND: u8 = 1;
/// Configuration error (e.g. no source, unreadable catalog, bad table name).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NOT_FOUND),
        Err(e) => {
            eprintln!("tablescope: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Run one subcommand. Returns `false` when the requested object was not found.
fn run(args: &Args) -> Result<bool> {
    if let Command::JsonSchema { document } = &args.command {
        let schema = match document {
            SchemaDocument::Config => schemars::schema_for!(CatalogConfig),
            SchemaDocument::Catalog => schemars::schema_for!(CatalogDocument),
        };
        let json = if args.compact {
            serde_json::to_string(&schema)?
        } else {
            serde_json::to_string_pretty(&schema)?
        };
        write_output(&json)?;
        return Ok(true);
    }

    let config = resolve_config(args)?;
    debug!(?config, "resolved catalog configuration");
    let catalog = open_catalog(&config)?;

    match commands::execute(&catalog, &args.command)? {
        Outcome::Found(report) => {
            let content = match args.format {
                OutputFormat::Json => output::format_json(&report, args.compact),
                OutputFormat::Table => output::format_table(&report, true),
            };
            write_output(&content)?;
            Ok(true)
        }
        Outcome::NotFound(message) => {
            if !args.quiet {
                eprintln!("tablescope: {message}");
            }
            Ok(false)
        }
    }
}

fn write_output(content: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    // Ensure newline at end for terminal output
    if !content.ends_with('\n') {
        writeln!(stdout).context("Failed to write to stdout")?;
    }
    Ok(())
}
