//! Check command implementation.

use anyhow::{Context, Result};
use phpdoc_check_core::{Analyzer, Config, RuleRegistry};
use phpdoc_check_rules::register_builtin_rules;
use std::path::PathBuf;

use crate::OutputFormat;

/// Command-line options for a check run.
#[derive(Debug)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule codes; overrides the config when set.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Worker thread count.
    pub jobs: Option<usize>,
}

/// Runs the check command.
pub fn run(paths: &[PathBuf], options: &CheckOptions, config: Config) -> Result<()> {
    let mut registry = RuleRegistry::new();
    register_builtin_rules(&mut registry).context("Failed to register built-in rules")?;
    registry.enable_all_rules();

    let mut builder = Analyzer::builder()
        .paths(paths.iter().cloned())
        .registry(registry)
        .config(config)
        .excludes(options.exclude.iter().cloned());

    if let Some(filter) = &options.rules {
        builder = builder.select_rules(parse_rule_list(filter));
    }
    if let Some(jobs) = options.jobs {
        builder = builder.parallelism(jobs);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {} path(s) with {} rules",
        analyzer.paths().len(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze();

    super::output::print(&result, options.format)?;

    if result.has_errors() || !result.errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn parse_rule_list(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_lowercase)
        .collect()
}
