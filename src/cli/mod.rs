//! Command-line host for aisearch.
//!
//! Resolves one query the way the launcher would and prints the resulting
//! items, optionally opening the search URL.

pub mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::config::Preferences;
use crate::core::resolve_preferences;
use crate::executor::{execute, OpenCrateOpener, SystemOpen};

#[derive(Parser, Debug)]
#[command(name = "aisearch")]
#[command(about = "Route a query to an AI or web search engine", long_about = None)]
pub struct Cli {
    /// Query text, e.g. ':chatgpt explain lifetimes' or 'wiki: rust'
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Engine used when the query names none
    #[arg(long, value_name = "ID")]
    pub default_engine: Option<String>,

    /// JSON array of engine definitions
    #[arg(long, value_name = "JSON")]
    pub engines_config: Option<String>,

    /// Preferences file (default: ~/.config/aisearch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print items as JSON
    #[arg(long)]
    pub json: bool,

    /// Open the search URL in the default browser
    #[arg(long)]
    pub open: bool,
}

/// Parse arguments and run against stdout and the system browser.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run_with(cli, &mut stdout.lock(), &OpenCrateOpener)
}

/// Run a parsed command line against the given output and opener.
pub fn run_with(cli: Cli, out: &mut dyn Write, opener: &dyn SystemOpen) -> Result<()> {
    let prefs = match &cli.config {
        Some(path) => Preferences::load_from(path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))?,
        None => Preferences::load(),
    }
    .with_overrides(cli.default_engine, cli.engines_config);

    let query = cli.query.join(" ");
    let items = resolve_preferences(&query, &prefs).into_items();

    if cli.json {
        render::write_json(out, &items)?;
    } else {
        render::write_plain(out, &items)?;
    }

    if cli.open {
        let Some(action) = items
            .iter()
            .find(|item| item.is_actionable())
            .and_then(|item| item.action.as_ref())
        else {
            bail!("Nothing to open for query {:?}", query);
        };
        execute(action, opener).context("Failed to open search URL")?;
    }

    Ok(())
}
