//! Rule requiring a typed `@var` tag in property docs.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs, TYPE_PLACEHOLDER};

/// Rule code for variables-have-var.
pub const CODE: &str = "variableshasvar";

/// Requires documented properties to carry `@var <type>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariablesHaveVar;

impl VariablesHaveVar {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for VariablesHaveVar {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Phpdocs for variables contain @var with variable type"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.variables()
            .iter()
            .filter_map(|variable| {
                let doc = variable.phpdocs.as_ref()?;
                let typed = doc
                    .params("var")
                    .iter()
                    .any(|slots| slots.first().is_some_and(|ty| ty != TYPE_PLACEHOLDER));
                if typed {
                    return None;
                }
                Some(
                    ViolationArgs::new()
                        .at_line(doc.line_of("@var"))
                        .with("variable", variable.fullname.clone()),
                )
            })
            .collect()
    }
}
