//! Integration test: path walking and checking end-to-end via Analyzer.

use phpdoc_check_core::{Analyzer, Config, PhpFile, Rule, RuleRegistry, Severity, ViolationArgs};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Flags every class without a doc block.
struct UndocumentedClass;

impl Rule for UndocumentedClass {
    fn code(&self) -> &'static str {
        "undocumentedclass"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.classes()
            .iter()
            .filter(|c| c.phpdocs.is_none())
            .map(|c| {
                ViolationArgs::new()
                    .at_token(file, c.boundaries.0)
                    .with("class", c.name.clone())
            })
            .collect()
    }
}

fn registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry
        .add_rule(UndocumentedClass)
        .expect("rule should register");
    registry.enable_all_rules();
    registry
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write fixture");
}

fn project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(root, "lib/a.php", "<?php\nclass A {}\n");
    write(root, "lib/b.php", "<?php\n/** Doc */\nclass B {}\n");
    write(root, "lib/nested/c.php", "<?php\n\nclass C {}\n");
    write(root, "lib/readme.txt", "class NotPhp {}\n");
    write(root, "vendor/d.php", "<?php\nclass D {}\n");
    dir
}

#[test]
fn walks_directory_and_filters() {
    let dir = project();
    let analyzer = Analyzer::builder()
        .path(dir.path())
        .registry(registry())
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();

    assert_eq!(result.files_checked, 3, "vendor and .txt are skipped");
    assert!(result.errors.is_empty());
    let messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "undocumentedclass. Error: class: A, line: 2",
            "undocumentedclass. Error: class: C, line: 3",
        ]
    );
    assert!(result.has_errors());
}

#[test]
fn explicit_file_is_always_checked() {
    let dir = project();
    let analyzer = Analyzer::builder()
        .path(dir.path().join("lib/readme.txt"))
        .registry(registry())
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].location.line, 1);
}

#[test]
fn missing_path_is_recorded_and_others_continue() {
    let dir = project();
    let analyzer = Analyzer::builder()
        .path(dir.path().join("does-not-exist"))
        .path(dir.path().join("lib/a.php"))
        .registry(registry())
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].path.ends_with("does-not-exist"));
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn config_controls_rules_and_walk() {
    let dir = project();
    let config = Config::parse(
        r#"
[analyzer]
exclude = ["**/nested/**"]
parallelism = 2

[rules.undocumentedclass]
severity = "warning"

[messages]
error_undocumentedclass = "Class {class} needs docs"
"#,
    )
    .expect("config should parse");

    let analyzer = Analyzer::builder()
        .path(dir.path().join("lib"))
        .registry(registry())
        .config(config)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].message, "Class A needs docs");
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(!result.has_errors());
}

#[test]
fn excluded_names_match_whole_directories() {
    let dir = project();
    write(dir.path(), "lib/vendorlist.php", "<?php\n/** Doc */\nclass V {}\n");
    let config = Config::parse("[analyzer]\nexclude = [\"vendor\"]\n").expect("config should parse");

    let analyzer = Analyzer::builder()
        .path(dir.path())
        .registry(registry())
        .config(config)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();
    assert_eq!(result.files_checked, 4, "only vendor/d.php is skipped");
}

#[test]
fn disabled_rule_reports_nothing() {
    let dir = project();
    let config = Config::parse("[rules.undocumentedclass]\nenabled = false\n")
        .expect("config should parse");

    let analyzer = Analyzer::builder()
        .path(dir.path())
        .registry(registry())
        .config(config)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze();
    assert_eq!(result.files_checked, 3);
    assert!(result.violations.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let dir = project();
    let analyzer = Analyzer::builder()
        .path(dir.path())
        .registry(registry())
        .parallelism(4)
        .build()
        .expect("analyzer should build");

    let first: Vec<String> = analyzer.analyze().violations.iter().map(ToString::to_string).collect();
    let second: Vec<String> = analyzer.analyze().violations.iter().map(ToString::to_string).collect();
    assert_eq!(first, second);
}
