//! Rule requiring a phpdoc block on every class property.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for variables-documented.
pub const CODE: &str = "variablesdocumented";

/// Requires every class property to be documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariablesDocumented;

impl VariablesDocumented {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for VariablesDocumented {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "All variables are documented"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.variables()
            .iter()
            .filter(|variable| variable.phpdocs.is_none())
            .map(|variable| {
                ViolationArgs::new()
                    .at_declaration(file, variable)
                    .with("variable", variable.fullname.clone())
            })
            .collect()
    }
}
