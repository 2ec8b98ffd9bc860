//! Rule requiring a short description in file and class docs.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for phpdocs-first-line.
pub const CODE: &str = "phpdocsfirstline";

/// Requires the file-level doc and every class doc to open with a
/// one-line description.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpdocsFirstLine;

impl PhpdocsFirstLine {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PhpdocsFirstLine {
    fn code(&self) -> &'static str {
        CODE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["phpdocsfistline"]
    }

    fn description(&self) -> &'static str {
        "File-level phpdocs block and class phpdocs should have a short description"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        let mut found = Vec::new();

        if let Some(doc) = file.file_phpdocs() {
            if doc.short_description().is_empty() {
                found.push(
                    ViolationArgs::new()
                        .at_line(doc.line())
                        .with("object", "file"),
                );
            }
        }

        for class in file.classes() {
            let Some(doc) = &class.phpdocs else {
                continue;
            };
            if doc.short_description().is_empty() {
                found.push(
                    ViolationArgs::new()
                        .at_line(doc.line())
                        .with("object", format!("class {}", class.name)),
                );
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_tags_only_blocks() {
        let src = "<?php\n/**\n * @package foo\n */\n\n/**\n * @copyright 2020\n */\nclass A {}\n";
        let found = PhpdocsFirstLine::new().validate(&PhpFile::parse("test.php", src));
        let objects: Vec<(Option<&str>, Option<usize>)> =
            found.iter().map(|a| (a.get("object"), a.line())).collect();
        assert_eq!(
            objects,
            vec![(Some("file"), Some(2)), (Some("class A"), Some(6))]
        );
    }

    #[test]
    fn described_blocks_pass() {
        let src = "<?php\n/**\n * Library.\n */\n\n/**\n * A thing.\n */\nclass A {}\n";
        assert!(PhpdocsFirstLine::new()
            .validate(&PhpFile::parse("test.php", src))
            .is_empty());
    }

    #[test]
    fn undocumented_class_is_not_this_rules_concern() {
        let src = "<?php\n/** File. */\n\n$x = 1;\nclass A {}\n";
        assert!(PhpdocsFirstLine::new()
            .validate(&PhpFile::parse("test.php", src))
            .is_empty());
    }
}
