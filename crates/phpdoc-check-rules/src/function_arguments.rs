//! Rule checking that `@param` tags match the declared arguments.
//!
//! # Detected Patterns
//!
//! - a `@param` count different from the argument count
//! - a `@param` without both a type and a name
//! - a `@param` type that differs from the declared type
//! - a `@param` whose type was omitted (`@param $x`)
//! - a `@param` name that differs from the argument name
//! - a `@return` without a type
//!
//! A missing `@return` is not reported.

use phpdoc_check_core::{Argument, DocComment, FunctionDecl, PhpFile, Rule, ViolationArgs, TYPE_PLACEHOLDER};

/// Rule code for function-arguments.
pub const CODE: &str = "functionarguments";

/// Checks that documented parameters agree with the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionArguments;

impl FunctionArguments {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FunctionArguments {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Phpdocs for functions properly define all parameters"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        file.functions()
            .iter()
            .filter_map(|function| {
                let doc = function.phpdocs.as_ref()?;
                if documentation_matches(function, doc) {
                    return None;
                }
                Some(
                    ViolationArgs::new()
                        .at_line(doc.line_of("@param"))
                        .with("function", function.fullname.clone()),
                )
            })
            .collect()
    }
}

fn documentation_matches(function: &FunctionDecl, doc: &DocComment) -> bool {
    let params = doc.params("param");
    if params.len() != function.arguments.len() {
        return false;
    }
    let params_match = params
        .iter()
        .zip(&function.arguments)
        .all(|(param, argument)| param_matches(param, argument));

    params_match
        && doc.params("return").iter().all(|slots| {
            slots
                .first()
                .is_some_and(|ty| !ty.is_empty() && ty != TYPE_PLACEHOLDER)
        })
}

fn param_matches(param: &[String], argument: &Argument) -> bool {
    let [ty, name, ..] = param else {
        return false;
    };
    if !argument.type_hint.is_empty() && argument.type_hint != *ty {
        return false;
    }
    ty != TYPE_PLACEHOLDER && argument.name == *name
}
