//! Rule trait for defining documentation checks.

use crate::file::{Declaration, PhpFile};
use crate::types::Severity;
use serde::Serialize;

/// A documentation rule evaluated against one parsed PHP file.
///
/// Rules are pure: they read the [`PhpFile`] and describe each problem
/// as a [`ViolationArgs`]. Turning those into messages is the
/// registry's job.
///
/// # Example
///
/// ```ignore
/// use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};
///
/// pub struct FilePhpdocPresent;
///
/// impl Rule for FilePhpdocPresent {
///     fn code(&self) -> &'static str { "filephpdocpresent" }
///
///     fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
///         if file.file_phpdocs().is_none() {
///             vec![ViolationArgs::new()]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the unique rule code (e.g., "classesdocumented").
    fn code(&self) -> &'static str;

    /// Other codes that select this rule (`--rules`, config tables).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Message key for the display name, tried before `rule_<code>`.
    fn name_key(&self) -> Option<&'static str> {
        None
    }

    /// Message key for the error template, tried before `error_<code>`.
    fn error_key(&self) -> Option<&'static str> {
        None
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns one entry per problem found.
    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Location and template arguments of one rule violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationArgs {
    line: Option<usize>,
    token: Option<usize>,
    fields: Vec<(String, String)>,
}

impl ViolationArgs {
    /// Creates arguments with no location and no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reported line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Anchors the violation on a token: sets its line and remembers the
    /// token for column and span reporting.
    #[must_use]
    pub fn at_token(mut self, file: &PhpFile, tid: usize) -> Self {
        self.line = Some(file.line_number(tid));
        self.token = Some(tid);
        self
    }

    /// Anchors the violation on the token that names a declaration.
    #[must_use]
    pub fn at_declaration(self, file: &PhpFile, declaration: &impl Declaration) -> Self {
        self.at_token(file, declaration.line_token())
    }

    /// Appends a named template field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// The reported line, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// The anchoring token, if any.
    #[must_use]
    pub fn token(&self) -> Option<usize> {
        self.token
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn code(&self) -> &'static str {
            "testrule"
        }

        fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
            file.classes()
                .iter()
                .map(|c| {
                    ViolationArgs::new()
                        .at_token(file, c.boundaries.0)
                        .with("class", c.name.clone())
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.code(), "testrule");
        assert!(rule.name_key().is_none());
        assert!(rule.error_key().is_none());
        assert!(rule.aliases().is_empty());
        assert_eq!(rule.description(), "");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn test_rule_validate_anchors_on_token() {
        let file = PhpFile::parse("a.php", "<?php\n\nclass Foo {}\n");
        let found = TestRule.validate(&file);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line(), Some(3));
        assert_eq!(found[0].get("class"), Some("Foo"));
        assert!(found[0].token().is_some());
    }

    #[test]
    fn test_declarations_anchor_on_their_name() {
        let file = PhpFile::parse(
            "a.php",
            "<?php\nclass A {\n    public\n        $x;\n    const\n        B = 1;\n}\n",
        );
        let property = ViolationArgs::new().at_declaration(&file, &file.variables()[0]);
        assert_eq!(property.line(), Some(4));
        let constant = file.constants().next().expect("constant");
        assert_eq!(ViolationArgs::new().at_declaration(&file, constant).line(), Some(6));
        let class = ViolationArgs::new().at_declaration(&file, &file.classes()[0]);
        assert_eq!(class.line(), Some(2));
    }

    #[test]
    fn test_args_keep_field_order() {
        let args = ViolationArgs::new().with("b", "2").with("a", "1");
        let keys: Vec<&str> = args.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert!(args.line().is_none());
        assert!(args.get("missing").is_none());
    }
}
