//! Rule requiring a `@copyright` tag in class docs.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for classes-have-copyright.
pub const CODE: &str = "classeshavecopyright";

/// Requires a non-empty `@copyright` tag in every class doc.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassesHaveCopyright;

impl ClassesHaveCopyright {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassesHaveCopyright {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Classes must have a @copyright tag"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.classes()
            .iter()
            .filter_map(|class| {
                let doc = class.phpdocs.as_ref()?;
                if doc.non_empty_tags("copyright").next().is_some() {
                    return None;
                }
                Some(
                    ViolationArgs::new()
                        .at_line(doc.line_of("@copyright"))
                        .with("object", class.name.clone()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_class_without_copyright() {
        let src = "<?php\n$x = 1;\n/**\n * A.\n * @copyright 2020 Me\n */\nclass A {}\n/**\n * B.\n */\nclass B {}\nclass C {}\n";
        let found = ClassesHaveCopyright::new().validate(&PhpFile::parse("test.php", src));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("object"), Some("B"));
        assert_eq!(found[0].line(), Some(8));
    }
}
