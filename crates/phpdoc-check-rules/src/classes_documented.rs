//! Rule requiring a phpdoc block on every class.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for classes-documented.
pub const CODE: &str = "classesdocumented";

/// Requires every class, interface, trait and enum to be documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassesDocumented;

impl ClassesDocumented {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassesDocumented {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "All classes are documented"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.classes()
            .iter()
            .filter(|class| class.phpdocs.is_none())
            .map(|class| {
                ViolationArgs::new()
                    .at_declaration(file, class)
                    .with("class", class.name.clone())
            })
            .collect()
    }
}
