//! Message catalog for rule names and error templates.
//!
//! Keys follow the `rule_<code>` / `error_<code>` convention. Templates
//! reference violation fields as `{field}`.

use crate::rule::{Rule, ViolationArgs};
use std::collections::HashMap;

const ENGLISH: &[(&str, &str)] = &[
    ("rule_filephpdocpresent", "File-level phpdocs block is present"),
    ("error_filephpdocpresent", "File-level phpdocs block is not found"),
    ("rule_classesdocumented", "All classes are documented"),
    ("error_classesdocumented", "Class {class} is not documented"),
    ("rule_functionsdocumented", "All functions are documented"),
    ("error_functionsdocumented", "Function {function} is not documented"),
    ("rule_variablesdocumented", "All variables are documented"),
    ("error_variablesdocumented", "Variable {variable} is not documented"),
    ("rule_constsdocumented", "All constants are documented"),
    ("error_constsdocumented", "Constant {object} is not documented"),
    ("rule_definesdocumented", "All define statements are documented"),
    ("error_definesdocumented", "Define statement for {object} is not documented"),
    ("rule_noinlinephpdocs", "There are no comments starting with three or more slashes"),
    ("error_noinlinephpdocs", "Found comment starting with three or more slashes"),
    ("rule_phpdocsfirstline", "File-level phpdocs block and class phpdocs should have a short description"),
    ("error_phpdocsfirstline", "No one-line description found in phpdocs for {object}"),
    ("rule_functionarguments", "Phpdocs for functions properly define all parameters"),
    ("error_functionarguments", "Phpdocs for function {function} has incomplete parameters list"),
    ("rule_variableshasvar", "Phpdocs for variables contain @var with variable type"),
    ("error_variableshasvar", "Phpdocs for variable {variable} does not contain @var or incorrect"),
    ("rule_definedoccorrect", "Check syntax for define statement"),
    ("error_definedoccorrect", "Phpdocs for define statement must start with constant name and dash: {object}"),
    ("rule_filehascopyright", "Files must have a @copyright tag"),
    ("error_filehascopyright", "File-level phpdocs block does not have a @copyright tag"),
    ("rule_classeshavecopyright", "Classes must have a @copyright tag"),
    ("error_classeshavecopyright", "Class {object} does not have a @copyright tag"),
];

/// Lookup table of display names and error templates.
#[derive(Debug, Clone)]
pub struct Messages {
    strings: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

impl Messages {
    /// Catalog with the built-in English strings.
    #[must_use]
    pub fn english() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Catalog with no strings; every lookup falls back.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// Looks up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Adds or replaces a string.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Adds or replaces every given string.
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.set(key, value);
        }
    }

    /// Display name: `name_key`, then `rule_<code>`, then the code itself.
    #[must_use]
    pub fn rule_name(&self, rule: &dyn Rule) -> String {
        rule.name_key()
            .and_then(|key| self.get(key))
            .or_else(|| self.get(&format!("rule_{}", rule.code())))
            .map_or_else(|| rule.code().to_string(), str::to_string)
    }

    /// Error message: `error_key`, then `error_<code>`, then a generic
    /// `"<name>. Error: k: v, ..."` listing of the arguments.
    #[must_use]
    pub fn format_error(&self, rule: &dyn Rule, args: &ViolationArgs) -> String {
        let template = rule
            .error_key()
            .and_then(|key| self.get(key))
            .or_else(|| self.get(&format!("error_{}", rule.code())));

        if let Some(template) = template {
            return substitute(template, args);
        }

        let mut message = format!("{}. Error", self.rule_name(rule));
        let mut parts: Vec<String> = args
            .fields()
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        if let Some(line) = args.line() {
            parts.push(format!("line: {line}"));
        }
        if !parts.is_empty() {
            message.push_str(": ");
            message.push_str(&parts.join(", "));
        }
        message
    }
}

/// Replaces each `{field}` with its value; unknown placeholders stay.
fn substitute(template: &str, args: &ViolationArgs) -> String {
    let mut out = template.to_string();
    for (key, value) in args.fields() {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    if let Some(line) = args.line() {
        out = out.replace("{line}", &line.to_string());
    }
    out
}
