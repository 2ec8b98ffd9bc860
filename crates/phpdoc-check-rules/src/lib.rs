//! # phpdoc-check-rules
//!
//! Built-in documentation rules for phpdoc-check.
//!
//! ## Available Rules
//!
//! | Code | Description |
//! |------|-------------|
//! | `filephpdocpresent` | File-level phpdoc block is present |
//! | `classesdocumented` | Every class has a phpdoc block |
//! | `functionsdocumented` | Every function and method has a phpdoc block |
//! | `variablesdocumented` | Every class property has a phpdoc block |
//! | `constsdocumented` | Every `const` has a phpdoc block |
//! | `definesdocumented` | Every `define()` has a phpdoc block |
//! | `noinlinephpdocs` | No `/***` blocks or `///` comments |
//! | `phpdocsfirstline` | File and class docs have a short description |
//! | `functionarguments` | `@param` tags match the declared arguments |
//! | `variableshasvar` | Property docs carry a typed `@var` |
//! | `definedoccorrect` | Define docs read `NAME - explanation` |
//! | `filehascopyright` | File doc has a `@copyright` tag |
//! | `classeshavecopyright` | Class docs have a `@copyright` tag |
//!
//! ## Usage
//!
//! ```ignore
//! use phpdoc_check_core::RuleRegistry;
//!
//! let mut registry = RuleRegistry::new();
//! phpdoc_check_rules::register_builtin_rules(&mut registry)?;
//! registry.enable_all_rules();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classes_documented;
mod classes_have_copyright;
mod consts_documented;
mod define_doc_correct;
mod defines_documented;
mod file_has_copyright;
mod file_phpdoc_present;
mod function_arguments;
mod functions_documented;
mod no_inline_phpdocs;
mod phpdocs_first_line;
mod variables_documented;
mod variables_have_var;

pub use classes_documented::ClassesDocumented;
pub use classes_have_copyright::ClassesHaveCopyright;
pub use consts_documented::ConstsDocumented;
pub use define_doc_correct::DefineDocCorrect;
pub use defines_documented::DefinesDocumented;
pub use file_has_copyright::FileHasCopyright;
pub use file_phpdoc_present::FilePhpdocPresent;
pub use function_arguments::FunctionArguments;
pub use functions_documented::FunctionsDocumented;
pub use no_inline_phpdocs::NoInlinePhpdocs;
pub use phpdocs_first_line::PhpdocsFirstLine;
pub use variables_documented::VariablesDocumented;
pub use variables_have_var::VariablesHaveVar;

use phpdoc_check_core::{RegistryError, RuleBox, RuleRegistry};

/// Re-export core types for convenience.
pub use phpdoc_check_core::{Rule, Severity, Violation};

/// Returns every built-in rule in registration order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FilePhpdocPresent::new()),
        Box::new(ClassesDocumented::new()),
        Box::new(FunctionsDocumented::new()),
        Box::new(VariablesDocumented::new()),
        Box::new(ConstsDocumented::new()),
        Box::new(DefinesDocumented::new()),
        Box::new(NoInlinePhpdocs::new()),
        Box::new(PhpdocsFirstLine::new()),
        Box::new(FunctionArguments::new()),
        Box::new(VariablesHaveVar::new()),
        Box::new(DefineDocCorrect::new()),
        Box::new(FileHasCopyright::new()),
        Box::new(ClassesHaveCopyright::new()),
    ]
}

/// Registers every built-in rule. Rules are registered disabled.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateRule`] if a built-in code is
/// already registered.
pub fn register_builtin_rules(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    for rule in all_rules() {
        registry.add_boxed(rule)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let rules = all_rules();
        let codes: HashSet<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), 13);
    }

    #[test]
    fn every_rule_has_catalog_strings() {
        let messages = phpdoc_check_core::Messages::english();
        for rule in all_rules() {
            assert!(
                messages.get(&format!("rule_{}", rule.code())).is_some(),
                "missing name for {}",
                rule.code()
            );
            assert!(
                messages.get(&format!("error_{}", rule.code())).is_some(),
                "missing error for {}",
                rule.code()
            );
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn registering_twice_fails() {
        let mut registry = RuleRegistry::new();
        register_builtin_rules(&mut registry).expect("first registration");
        assert!(register_builtin_rules(&mut registry).is_err());
        assert_eq!(registry.registered_rules().count(), 13);
    }
}
