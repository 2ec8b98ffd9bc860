//! Configuration types for phpdoc-check.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for phpdoc-check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Message catalog overrides (`rule_<code>`, `error_<code>`, ...).
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root path to analyze when none is given (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// File extensions checked inside directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Maximum number of parallel file analyses.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            extensions: default_extensions(),
            parallelism: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/vendor/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/.git/**".to_string(),
    ]
}

fn default_extensions() -> Vec<String> {
    vec!["php".to_string()]
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.extensions, vec!["php".to_string()]);
        assert!(config.analyzer.exclude.iter().any(|p| p == "**/vendor/**"));
        assert!(config.rules.is_empty());
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./lib"
exclude = ["**/generated/**"]
parallelism = 4

[rules.filehascopyright]
enabled = false

[rules.noinlinephpdocs]
severity = "warning"

[messages]
error_classesdocumented = "Document class {class}"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./lib"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**".to_string()]);
        assert_eq!(config.analyzer.extensions, vec!["php".to_string()]);
        assert_eq!(config.analyzer.parallelism, Some(4));
        assert_eq!(config.rules["filehascopyright"].enabled, Some(false));
        assert_eq!(config.rules["noinlinephpdocs"].enabled, None);
        assert_eq!(
            config.rules["noinlinephpdocs"].severity,
            Some(Severity::Warning)
        );
        assert!(!config.rules.contains_key("unlisted"));
        assert_eq!(
            config.messages.get("error_classesdocumented").map(String::as_str),
            Some("Document class {class}")
        );
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("[analyzer\nroot = 1").expect_err("invalid toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/phpdoc-check.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
