//! List rules command implementation.

use anyhow::{Context, Result};
use phpdoc_check_core::RuleRegistry;
use phpdoc_check_rules::register_builtin_rules;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let mut registry = RuleRegistry::new();
    register_builtin_rules(&mut registry).context("Failed to register built-in rules")?;

    println!("Available rules:\n");
    println!("{:<22} {:<8} Name", "Code", "Severity");
    println!("{}", "-".repeat(80));

    for rule in registry.registered_rules() {
        println!(
            "{:<22} {:<8} {}",
            rule.code(),
            registry.severity(rule).to_string(),
            registry.rule_name(rule)
        );
        println!("{:<31} {}", "", rule.description());
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  phpdoc-check check --rules classesdocumented,functionarguments");

    Ok(())
}
