//! Rule forbidding doc comments opened with an extra marker.
//!
//! # Detected Patterns
//!
//! - `/*** ... */`
//! - `/// ...`

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for no-inline-phpdocs.
pub const CODE: &str = "noinlinephpdocs";

/// Forbids `/***` blocks and `///` comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInlinePhpdocs;

impl NoInlinePhpdocs {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoInlinePhpdocs {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "There are no comments starting with three or more slashes"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.phpdocs()
            .iter()
            .filter(|doc| doc.is_inline())
            .map(|doc| ViolationArgs::new().at_token(file, doc.token_index()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_triple_star_and_triple_slash() {
        let src = "<?php\n/*** Loud */\nfunction f() {\n    /// note\n}\n/** Fine */\nfunction g() {}\n";
        let found = NoInlinePhpdocs::new().validate(&PhpFile::parse("test.php", src));
        let lines: Vec<Option<usize>> = found.iter().map(ViolationArgs::line).collect();
        assert_eq!(lines, vec![Some(2), Some(4)]);
    }

    #[test]
    fn plain_comments_pass() {
        let src = "<?php\n// one\n/* two */\n# three\n";
        assert!(NoInlinePhpdocs::new()
            .validate(&PhpFile::parse("test.php", src))
            .is_empty());
    }
}
