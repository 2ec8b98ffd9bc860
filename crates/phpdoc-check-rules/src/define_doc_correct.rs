//! Rule checking the description format of `define()` docs.
//!
//! The description must read `NAME - explanation`.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};
use regex::Regex;

/// Rule code for define-doc-correct.
pub const CODE: &str = "definedoccorrect";

/// Requires define docs to start with the constant name and a dash.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefineDocCorrect;

impl DefineDocCorrect {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn describes(name: &str, description: &str) -> bool {
    let pattern = format!(r"^\s*{}\s+-\s+(.*)", regex::escape(name));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!("Cannot match define {}: {}", name, e);
            return false;
        }
    };
    re.captures(description)
        .and_then(|caps| caps.get(1))
        .is_some_and(|explanation| !explanation.as_str().trim().is_empty())
}

impl Rule for DefineDocCorrect {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Check syntax for define statement"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.defines()
            .filter_map(|define| {
                let doc = define.phpdocs.as_ref()?;
                if describes(&define.name, &doc.description()) {
                    return None;
                }
                Some(
                    ViolationArgs::new()
                        .at_line(doc.line())
                        .with("object", define.fullname.clone()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(src: &str) -> Vec<ViolationArgs> {
        DefineDocCorrect::new().validate(&PhpFile::parse("test.php", src))
    }

    #[test]
    fn name_dash_explanation_passes() {
        let src = "<?php\n/**\n * MAX_SIZE - largest upload in bytes\n */\ndefine('MAX_SIZE', 10);\n";
        assert!(check(src).is_empty());
    }

    #[test]
    fn missing_dash_is_reported() {
        let src = "<?php\n$x = 1;\n/**\n * Largest upload in bytes\n */\ndefine('MAX_SIZE', 10);\n";
        let found = check(src);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("object"), Some("MAX_SIZE"));
        assert_eq!(found[0].line(), Some(3));
    }

    #[test]
    fn empty_explanation_is_reported() {
        assert!(!describes("A", "A - "));
        assert!(!describes("A", "A -"));
        assert!(describes("A", "  A  -  x"));
    }

    #[test]
    fn name_is_matched_literally() {
        assert!(!describes("A.B", "AxB - x"));
        assert!(describes("A.B", "A.B - x"));
    }

    #[test]
    fn undocumented_define_is_skipped() {
        assert!(check("<?php\ndefine('A', 1);\n").is_empty());
    }
}
