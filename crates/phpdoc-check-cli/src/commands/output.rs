//! Shared output formatting for lint results.

use anyhow::Result;
use phpdoc_check_core::{LintResult, Severity, ViolationDiagnostic};
use std::collections::HashMap;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for violation in &result.violations {
        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!(
            "  {}: {}",
            severity_indicator(violation.severity),
            violation.message
        );
        println!();
    }

    print_path_errors(result);

    let summary_color = if errors > 0 || !result.errors.is_empty() {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_path_errors(result: &LintResult) {
    for error in &result.errors {
        println!(
            "\x1b[31mcannot check\x1b[0m {}: {}",
            error.path.display(),
            error.message
        );
    }
    if !result.errors.is_empty() {
        println!();
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
    for error in &result.errors {
        eprintln!("{}: {}", error.path.display(), error.message);
    }
}

fn print_pretty(result: &LintResult) {
    let mut sources: HashMap<&Path, Option<String>> = HashMap::new();

    for violation in &result.violations {
        let file = violation.location.file.as_path();
        let source = sources.entry(file).or_insert_with(|| {
            std::fs::read(file)
                .ok()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        });

        let mut diagnostic = ViolationDiagnostic::from(violation);
        if let Some(text) = source {
            diagnostic = diagnostic.with_source(file.display().to_string(), text.clone());
        }
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }

    for error in &result.errors {
        eprintln!("{}: {}", error.path.display(), error.message);
    }

    let (errors, warnings, infos) = result.count_by_severity();
    eprintln!(
        "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
        errors, warnings, infos, result.files_checked
    );
}
