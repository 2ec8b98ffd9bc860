//! # phpdoc-check-core
//!
//! Core framework for checking phpdoc documentation in PHP sources.
//!
//! This crate provides the building blocks of the linter:
//!
//! - [`tokenize`] and [`PhpFile`] for recovering declarations and their
//!   doc blocks from PHP source
//! - [`DocComment`] for reading a phpdoc block
//! - [`Rule`] trait and [`RuleRegistry`] for defining and running checks
//! - [`Analyzer`] for walking paths and collecting [`Violation`]s
//!
//! ## Example
//!
//! ```ignore
//! use phpdoc_check_core::{Analyzer, RuleRegistry};
//!
//! let mut registry = RuleRegistry::new();
//! registry.add_rule(MyRule)?;
//! registry.enable_all_rules();
//!
//! let analyzer = Analyzer::builder()
//!     .path("./lib")
//!     .registry(registry)
//!     .build()?;
//!
//! let result = analyzer.analyze();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod messages;
mod registry;
mod rule;
mod types;

pub mod file;
pub mod phpdoc;
pub mod token;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use file::{
    Argument, ClassDecl, ConstantDecl, ConstantKind, Declaration, FunctionDecl, PhpFile,
    VariableDecl,
};
pub use messages::Messages;
pub use phpdoc::{DocComment, Tag, TYPE_PLACEHOLDER};
pub use registry::{RegistryError, RuleRegistry};
pub use rule::{Rule, RuleBox, ViolationArgs};
pub use token::{tokenize, Token, TokenKind};
pub use types::{LintResult, Location, PathError, Severity, Violation, ViolationDiagnostic};
