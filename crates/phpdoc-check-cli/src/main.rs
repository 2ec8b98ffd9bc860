//! phpdoc-check CLI tool.
//!
//! Usage:
//! ```bash
//! phpdoc-check check [OPTIONS] [PATH]...
//! phpdoc-check list-rules
//! phpdoc-check init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Checks phpdoc documentation blocks in PHP sources
#[derive(Parser)]
#[command(name = "phpdoc-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run documentation checks
    Check {
        /// Files or directories to check (default: the configured root)
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Number of worker threads
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets rendered by miette.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
            exclude,
            jobs,
        } => {
            let (source, config) =
                config_resolver::load(project_dir(&paths), cli.config.as_deref())?;
            tracing::info!("Using config: {}", source);
            commands::check::run(
                &paths,
                &commands::check::CheckOptions {
                    format,
                    rules,
                    exclude,
                    jobs,
                },
                config,
            )
        }
        Commands::ListRules => commands::list_rules::run(),
        Commands::Init { force } => commands::init::run(force),
    }
}

/// Directory searched for a project config: the first path if it is a
/// directory, the current directory otherwise.
fn project_dir(paths: &[PathBuf]) -> &Path {
    paths
        .first()
        .filter(|p| p.is_dir())
        .map_or(Path::new("."), PathBuf::as_path)
}
