//! Rule catalog with an enabled subset.

use crate::config::Config;
use crate::file::PhpFile;
use crate::messages::Messages;
use crate::rule::{Rule, RuleBox, ViolationArgs};
use crate::types::{Location, Severity, Violation};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Errors raised while building a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A rule with the same code is already registered.
    #[error("Rule '{code}' is already registered")]
    DuplicateRule {
        /// The conflicting code.
        code: String,
    },
}

/// Registered rules, the enabled subset and the message catalog.
///
/// Built and configured up front, then shared read-only while files are
/// checked.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
    enabled: HashSet<String>,
    severities: HashMap<String, Severity>,
    messages: Messages,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.iter().map(|r| r.code()).collect::<Vec<_>>())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl RuleRegistry {
    /// Creates an empty registry with the English catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry using `messages`.
    #[must_use]
    pub fn with_messages(messages: Messages) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Registers a rule. Rules start disabled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRule`] if the code is taken.
    pub fn add_rule(&mut self, rule: impl Rule + 'static) -> Result<(), RegistryError> {
        self.add_boxed(Box::new(rule))
    }

    /// Registers an already boxed rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRule`] if the code is taken.
    pub fn add_boxed(&mut self, rule: RuleBox) -> Result<(), RegistryError> {
        let taken = std::iter::once(rule.code())
            .chain(rule.aliases().iter().copied())
            .find(|code| self.get(code).is_some());
        if let Some(code) = taken {
            return Err(RegistryError::DuplicateRule {
                code: code.to_string(),
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Enables or disables a rule by code or alias. Unknown codes are
    /// ignored.
    pub fn enable_rule(&mut self, code: &str, enabled: bool) {
        let Some(canonical) = self.get(code).map(|r| r.code()) else {
            debug!("Ignoring unknown rule code: {}", code);
            return;
        };
        if enabled {
            self.enabled.insert(canonical.to_string());
        } else {
            self.enabled.remove(canonical);
        }
    }

    /// Enables every registered rule.
    pub fn enable_all_rules(&mut self) {
        self.enabled = self.rules.iter().map(|r| r.code().to_string()).collect();
    }

    /// Disables every rule.
    pub fn disable_all_rules(&mut self) {
        self.enabled.clear();
    }

    /// Returns true if `code` is registered and enabled.
    #[must_use]
    pub fn is_enabled(&self, code: &str) -> bool {
        self.enabled.contains(code)
    }

    /// Looks up a registered rule by code or alias.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.code() == code || r.aliases().iter().any(|alias| *alias == code))
            .map(AsRef::as_ref)
    }

    /// All registered rules in registration order.
    pub fn registered_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Enabled rules in registration order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.registered_rules()
            .filter(|r| self.enabled.contains(r.code()))
    }

    /// The message catalog.
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Overrides the severity reported for a rule.
    pub fn set_severity(&mut self, code: &str, severity: Severity) {
        let code = self.get(code).map_or(code, |r| r.code());
        self.severities.insert(code.to_string(), severity);
    }

    /// Effective severity of a rule.
    #[must_use]
    pub fn severity(&self, rule: &dyn Rule) -> Severity {
        self.severities
            .get(rule.code())
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Display name of a rule.
    #[must_use]
    pub fn rule_name(&self, rule: &dyn Rule) -> String {
        self.messages.rule_name(rule)
    }

    /// Applies per-rule `enabled`/`severity` settings and message
    /// overrides from a configuration.
    pub fn apply_config(&mut self, config: &Config) {
        for (code, rule_config) in &config.rules {
            if let Some(enabled) = rule_config.enabled {
                self.enable_rule(code, enabled);
            }
            if let Some(severity) = rule_config.severity {
                self.set_severity(code, severity);
            }
        }
        self.messages.extend(
            config
                .messages
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
    }

    /// Runs the enabled rules and returns formatted messages in rule
    /// registration order.
    #[must_use]
    pub fn validate(&self, file: &PhpFile) -> Vec<String> {
        self.enabled_rules()
            .flat_map(|rule| {
                rule.validate(file)
                    .into_iter()
                    .map(move |args| self.messages.format_error(rule, &args))
            })
            .collect()
    }

    /// Runs the enabled rules and returns located violations.
    #[must_use]
    pub fn check(&self, file: &PhpFile) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in self.enabled_rules() {
            let found = rule.validate(file);
            if found.is_empty() {
                continue;
            }
            let name = self.rule_name(rule);
            let severity = self.severity(rule);
            for args in found {
                violations.push(Violation::new(
                    rule.code(),
                    name.clone(),
                    severity,
                    locate(file, &args),
                    self.messages.format_error(rule, &args),
                ));
            }
        }
        violations
    }
}

/// Resolves the reported position: the anchoring token when known,
/// otherwise the start of the reported line (line 1 if none).
fn locate(file: &PhpFile, args: &ViolationArgs) -> Location {
    let path = file.path().to_path_buf();
    let line = args.line().unwrap_or(1);
    match args.token() {
        Some(tid) => {
            let (offset, length) = file.token_span(tid);
            Location::new(path, line, file.column_number(tid)).with_span(offset, length)
        }
        None => Location::new(path, line, 1).with_span(file.line_offset(line), 0),
    }
}
