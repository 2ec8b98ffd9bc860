//! Rule requiring a phpdoc block on every function and method.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for functions-documented.
pub const CODE: &str = "functionsdocumented";

/// Requires every function and method to be documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionsDocumented;

impl FunctionsDocumented {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FunctionsDocumented {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "All functions are documented"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.functions()
            .iter()
            .filter(|function| function.phpdocs.is_none())
            .map(|function| {
                ViolationArgs::new()
                    .at_declaration(file, function)
                    .with("function", function.fullname.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_method_fullname() {
        let src = "<?php\n/** A */\nclass A {\n    /** Doc */\n    public function ok() {}\n\n    private function missing() {}\n}\n";
        let found = FunctionsDocumented::new().validate(&PhpFile::parse("test.php", src));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("function"), Some("A::missing"));
        assert_eq!(found[0].line(), Some(7));
    }

    #[test]
    fn closures_are_not_functions() {
        let src = "<?php\n$f = function () {};\n";
        assert!(FunctionsDocumented::new()
            .validate(&PhpFile::parse("test.php", src))
            .is_empty());
    }
}
