//! Integration test: built-in rules through the registry.

use phpdoc_check_core::{tokenize, Analyzer, DocComment, PhpFile, RuleRegistry, Violation};
use phpdoc_check_rules::register_builtin_rules;
use std::fs;
use tempfile::TempDir;

fn registry(codes: &[&str]) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    register_builtin_rules(&mut registry).expect("builtin rules should register");
    for code in codes {
        registry.enable_rule(code, true);
    }
    registry
}

fn all_enabled() -> RuleRegistry {
    let mut registry = registry(&[]);
    registry.enable_all_rules();
    registry
}

fn check(registry: &RuleRegistry, src: &str) -> Vec<Violation> {
    registry.check(&PhpFile::parse("test.php", src))
}

fn summary(violations: &[Violation]) -> Vec<(&str, &str, usize)> {
    violations
        .iter()
        .map(|v| (v.code.as_str(), v.message.as_str(), v.location.line))
        .collect()
}

// ── Concrete scenarios ──

#[test]
fn bare_class_reports_file_class_and_method() {
    let violations = check(&all_enabled(), "class Foo { function bar($x) {} }");
    assert_eq!(
        summary(&violations),
        vec![
            ("filephpdocpresent", "File-level phpdocs block is not found", 1),
            ("classesdocumented", "Class Foo is not documented", 1),
            ("functionsdocumented", "Function Foo::bar is not documented", 1),
        ]
    );
}

#[test]
fn documented_param_passes_argument_match() {
    let src = "<?php\n/**\n * Does a thing\n * @param int $x\n */\nfunction bar(int $x) {}\n";
    assert!(check(&registry(&["functionarguments"]), src).is_empty());
}

#[test]
fn four_slash_comment_is_flagged_regardless_of_content() {
    let registry = registry(&["noinlinephpdocs"]);
    for src in [
        "<?php\n/*** */\n",
        "<?php\n/*** @param int $x */\n",
        "<?php\n$x = 1;\n/***\n * Anything.\n */\n",
    ] {
        let violations = check(&registry, src);
        assert_eq!(violations.len(), 1, "{src}");
        assert_eq!(violations[0].code, "noinlinephpdocs");
    }
}

// ── Argument matching ──

fn two_argument_function(first: &str, second: &str) -> String {
    format!(
        "<?php\n/**\n * Adds.\n * @param int {first}\n * @param string {second}\n */\nfunction add(int $a, string $b) {{}}\n"
    )
}

#[test]
fn argument_match_detects_single_rename() {
    let registry = registry(&["functionarguments"]);
    assert!(check(&registry, &two_argument_function("$a", "$b")).is_empty());

    for (first, second) in [("$c", "$b"), ("$a", "$c")] {
        let violations = check(&registry, &two_argument_function(first, second));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Phpdocs for function add has incomplete parameters list"
        );
        assert_eq!(violations[0].location.line, 4);
    }
}

// ── Registry selection ──

#[test]
fn zero_enabled_rules_yield_nothing() {
    let registry = registry(&[]);
    for src in [
        "",
        "class Foo { function bar($x) {} }",
        "<?php\n/*** */\ndefine('X', 1);\n",
    ] {
        assert!(check(&registry, src).is_empty());
        assert!(registry.validate(&PhpFile::parse("test.php", src)).is_empty());
    }
}

#[test]
fn empty_file_yields_at_most_file_doc_violation() {
    for src in ["", "<?php\n", "<?php\n\n?>\n"] {
        let violations = check(&all_enabled(), src);
        assert!(violations.len() <= 1, "{src:?}");
        assert!(violations.iter().all(|v| v.code == "filephpdocpresent"));
    }
}

#[test]
fn well_documented_file_is_clean() {
    let src = r"<?php
// This file is part of a project.

/**
 * Helpers for widgets.
 *
 * @package    widgets
 * @copyright  2024 Widget Makers
 */

/**
 * WIDGET_LIMIT - maximum widgets per page
 */
define('WIDGET_LIMIT', 20);

/**
 * A widget.
 *
 * @copyright  2024 Widget Makers
 */
class widget {
    /** @var string display name */
    protected $name;

    /** Default colour. */
    const COLOUR = 'red';

    /**
     * Renders the widget.
     *
     * @param string $format output format
     * @param array|null $options
     * @return string
     */
    public function render(string $format, $options = null) {
        return '';
    }
}
";
    let violations = check(&all_enabled(), src);
    assert!(violations.is_empty(), "{:#?}", summary(&violations));
}

#[test]
fn validate_returns_messages_in_rule_order() {
    let registry = all_enabled();
    let file = PhpFile::parse("test.php", "<?php\nclass A {\n    public $x;\n}\n");
    assert_eq!(
        registry.validate(&file),
        vec![
            "File-level phpdocs block is not found".to_string(),
            "Class A is not documented".to_string(),
            "Variable A::$x is not documented".to_string(),
        ]
    );
}

#[test]
fn misspelled_first_line_code_selects_the_rule() {
    let registry = registry(&["phpdocsfistline"]);
    let codes: Vec<&str> = registry.enabled_rules().map(|r| r.code()).collect();
    assert_eq!(codes, vec!["phpdocsfirstline"]);

    let violations = check(&registry, "<?php\n/**\n * @package x\n */\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "phpdocsfirstline");
}

// ── Parsing properties ──

#[test]
fn tokenize_round_trips() {
    for src in [
        "",
        "<html><?php echo 1; ?>\n<p>x</p><?= $y ?>",
        "<?php\n/** doc */\nclass A { const B = \"}\"; }\n",
        "<?php\n$s = <<<EOT\n  text {$x}\nEOT;\n# hash\n#[Attr]\nfunction f() {}\n",
        "<?php\n$s = 'unterminated",
        "<?php /* open comment",
    ] {
        let rebuilt: String = tokenize(src).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, src);
    }
}

#[test]
fn short_description_follows_first_paragraph() {
    let cases = [
        ("/**\n * First.\n */", true),
        ("/**\n *\n * After blank.\n */", true),
        ("/**\n * @param int $x\n */", false),
        ("/** */", false),
    ];
    for (src, expected) in cases {
        let tokens = tokenize(src);
        let doc = DocComment::parse(&tokens[0], 0);
        assert_eq!(!doc.short_description().is_empty(), expected, "{src}");
    }
}

// ── Idempotence ──

#[test]
fn scanning_twice_is_identical() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("a.php"),
        "<?php\nclass A {\n    /** @var $x */\n    public $x;\n    function f($y) {}\n}\n",
    )
    .expect("write fixture");
    fs::write(dir.path().join("b.php"), "<?php\n/*** */\ndefine('B', 1);\n").expect("write fixture");

    let analyzer = Analyzer::builder()
        .path(dir.path())
        .registry(all_enabled())
        .build()
        .expect("analyzer should build");

    let first = analyzer.analyze();
    let second = analyzer.analyze();
    assert_eq!(first.files_checked, 2);
    assert!(!first.violations.is_empty());

    let render = |violations: &[Violation]| -> Vec<String> {
        violations.iter().map(ToString::to_string).collect()
    };
    assert_eq!(render(&first.violations), render(&second.violations));
}
