//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "phpdoc-check.toml";

const DEFAULT_CONFIG: &str = r#"# phpdoc-check configuration

[analyzer]
# Directories and glob patterns to skip. `**/<name>/**` skips every
# directory named <name>; other patterns match the whole path.
exclude = [
    "**/vendor/**",
    "**/node_modules/**",
    "**/.git/**",
    "**/cache/**",
]

# File extensions to check
extensions = ["php"]

# Worker threads (default: number of CPUs)
# parallelism = 4

# All rules are enabled by default.
# Each rule can be disabled or have its severity overridden.

[rules.filehascopyright]
enabled = true
# severity = "warning"

[rules.classeshavecopyright]
enabled = true

# [rules.definedoccorrect]
# enabled = false

# Message catalog overrides. Placeholders match the rule's fields.
[messages]
# error_classesdocumented = "Class {class} needs a phpdoc block"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: phpdoc-check check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
