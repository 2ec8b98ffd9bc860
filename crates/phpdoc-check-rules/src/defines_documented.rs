//! Rule requiring a phpdoc block on every `define()` call.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for defines-documented.
pub const CODE: &str = "definesdocumented";

/// Requires every `define()` statement to be documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinesDocumented;

impl DefinesDocumented {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DefinesDocumented {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "All define statements are documented"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.defines()
            .filter(|define| define.phpdocs.is_none())
            .map(|define| {
                ViolationArgs::new()
                    .at_declaration(file, define)
                    .with("object", define.fullname.clone())
            })
            .collect()
    }
}
