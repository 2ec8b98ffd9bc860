//! Rule requiring a phpdoc block on every `const` declaration.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for consts-documented.
pub const CODE: &str = "constsdocumented";

/// Requires every `const` to be documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstsDocumented;

impl ConstsDocumented {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ConstsDocumented {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "All constants are documented"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.constants()
            .filter(|constant| constant.phpdocs.is_none())
            .map(|constant| {
                ViolationArgs::new()
                    .at_declaration(file, constant)
                    .with("object", constant.fullname.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_undocumented_constant() {
        let src = "<?php\nclass A {\n    const X = 1,\n        Y = 2;\n}\ndefine('Z', 3);\n";
        let found = ConstsDocumented::new().validate(&PhpFile::parse("test.php", src));
        let objects: Vec<(Option<&str>, Option<usize>)> =
            found.iter().map(|a| (a.get("object"), a.line())).collect();
        assert_eq!(objects, vec![(Some("A::X"), Some(3)), (Some("A::Y"), Some(4))]);
    }
}
