mod config;

use anyhow::{Result, anyhow};
use clap::Parser;
use parseargs::{ParseConfig, parse_args_with};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "parseargs")]
#[command(
    version,
    about = "Parse command-line tokens against an option schema and print the result as JSON",
    long_about = None
)]
struct Cli {
    /// JSON config file: {"argv": [...], "strict": bool, "options": {...}}.
    /// Its argv is used unless tokens follow `--`; a bare `--` keeps it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Inline option schema (replaces the config file's options)
    #[arg(short, long, value_name = "JSON")]
    schema: Option<String>,

    /// Reject options missing from the schema
    #[arg(long)]
    strict: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Tokens to parse (overrides the config file's argv when non-empty)
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ParseConfig::default(),
    };
    if let Some(raw) = &cli.schema {
        config.options = config::parse_schema(raw)?;
    }
    if cli.strict {
        config.strict = true;
    }
    if !cli.args.is_empty() {
        config.argv = Some(cli.args);
    }

    tracing::debug!(
        strict = config.strict,
        options = config.options.len(),
        "executing parse"
    );

    // The tool's own argv is never the input; no tokens means an empty list.
    let parsed =
        parse_args_with(config, Vec::new).map_err(|e| anyhow!("{} [{}]", e, e.code()))?;

    let out = if cli.compact {
        serde_json::to_string(&parsed)?
    } else {
        serde_json::to_string_pretty(&parsed)?
    };
    println!("{out}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
