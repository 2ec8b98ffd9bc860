//! Path walker that runs the registry over PHP files.

use crate::config::Config;
use crate::file::PhpFile;
use crate::registry::RuleRegistry;
use crate::types::{LintResult, PathError, Violation};

use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a path.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A path given to the analyzer does not exist.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    paths: Vec<PathBuf>,
    registry: Option<RuleRegistry>,
    exclude_patterns: Vec<String>,
    extensions: Vec<String>,
    config: Option<Config>,
    parallelism: Option<usize>,
    selected_rules: Option<Vec<String>>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file or directory to check.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds several files or directories to check.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the rule registry. The analyzer checks its enabled rules.
    #[must_use]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds a file extension checked inside directories.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions.push(extension.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Restricts checking to the given rule codes, overriding the
    /// registry's and the configuration's enabled set.
    #[must_use]
    pub fn select_rules<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_rules = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the number of worker threads.
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Builds the analyzer.
    ///
    /// Configuration settings are merged in: its excludes and extensions
    /// are added, its rule settings and messages are applied to the
    /// registry, and its root is used when no path was given.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is invalid or the worker
    /// pool cannot be created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let mut paths = self.paths;
        if paths.is_empty() {
            paths.push(config.analyzer.root.clone());
        }

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        let excludes = exclude_patterns
            .iter()
            .map(|p| Exclude::parse(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut extensions = self.extensions;
        if extensions.is_empty() {
            extensions.clone_from(&config.analyzer.extensions);
        }

        let mut registry = self.registry.unwrap_or_default();
        registry.apply_config(&config);
        if let Some(codes) = &self.selected_rules {
            registry.disable_all_rules();
            for code in codes {
                if registry.get(code).is_none() {
                    warn!("Unknown rule: {}", code);
                }
                registry.enable_rule(code, true);
            }
        }

        let pool = match self.parallelism.or(config.analyzer.parallelism) {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            None => None,
        };

        Ok(Analyzer {
            paths,
            registry,
            excludes,
            extensions,
            pool,
        })
    }
}

/// A compiled exclude pattern.
#[derive(Debug)]
enum Exclude {
    /// A bare directory name (`vendor`, `**/vendor/**`): skips any
    /// directory with that exact name below the walk root.
    Dir(String),
    /// Any other glob, matched against the whole path.
    Glob(glob::Pattern),
}

impl Exclude {
    fn parse(pattern: &str) -> Result<Self, glob::PatternError> {
        let trimmed = pattern.trim_end_matches('/');
        let name = trimmed.strip_prefix("**/").unwrap_or(trimmed);
        let name = name.strip_suffix("/**").unwrap_or(name);
        if !name.is_empty() && !name.contains(['*', '?', '[', ']', '/', '\\']) {
            return Ok(Self::Dir(name.to_string()));
        }
        glob::Pattern::new(pattern).map(Self::Glob)
    }

    /// `relative` is the path below the walk root; `is_dir` tells whether
    /// it names a directory.
    fn matches(&self, path: &Path, relative: &Path, is_dir: bool) -> bool {
        match self {
            Self::Dir(name) => {
                let mut components: Vec<_> = relative.components().collect();
                if !is_dir {
                    components.pop();
                }
                components
                    .iter()
                    .any(|c| matches!(c, Component::Normal(part) if *part == name.as_str()))
            }
            Self::Glob(pattern) => {
                pattern.matches_path(path) || (is_dir && pattern.matches_path(&path.join("")))
            }
        }
    }
}

/// The main analyzer: walks paths and checks every PHP file found.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    paths: Vec<PathBuf>,
    registry: RuleRegistry,
    excludes: Vec<Exclude>,
    extensions: Vec<String>,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the paths being analyzed.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.registry.enabled_rules().count()
    }

    /// Checks every path and returns the aggregated result.
    ///
    /// Missing or unreadable paths are recorded in
    /// [`LintResult::errors`]; the remaining paths are still checked.
    #[must_use]
    pub fn analyze(&self) -> LintResult {
        info!("Starting analysis of {} path(s)", self.paths.len());

        let mut result = LintResult::new();
        let mut files = Vec::new();
        for path in &self.paths {
            match self.discover_files(path) {
                Ok(found) => files.extend(found),
                Err(e) => {
                    warn!("{}", e);
                    result.errors.push(PathError {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        files.sort();
        files.dedup();

        info!("Found {} files to analyze", files.len());

        let outcomes: Vec<(PathBuf, Result<Vec<Violation>, AnalyzerError>)> = self.in_pool(|| {
            files
                .par_iter()
                .map(|path| (path.clone(), self.check_file(path)))
                .collect()
        });

        for (path, outcome) in outcomes {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    result.errors.push(PathError {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        result
    }

    /// Parses `source` as the file `path` and runs the enabled rules.
    #[must_use]
    pub fn check_source(&self, path: impl Into<PathBuf>, source: &str) -> Vec<Violation> {
        let file = PhpFile::parse(path, source);
        self.registry.check(&file)
    }

    /// Reads and checks a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.check_source(path, &source))
    }

    fn in_pool<T, F>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    /// Resolves a path to the files it denotes. A file is always
    /// checked; a directory contributes its matching descendants.
    fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }
        if !root.is_dir() {
            return Err(AnalyzerError::NotFound(root.to_path_buf()));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || !self.should_exclude(root, e.path(), true)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !self.has_extension(path) {
                continue;
            }
            if self.should_exclude(root, path, false) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(entry.into_path());
        }

        Ok(files)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }

    /// Checks if a path found while walking `root` should be excluded.
    fn should_exclude(&self, root: &Path, path: &Path, is_dir: bool) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.excludes
            .iter()
            .any(|e| e.matches(path, relative, is_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_config_root() {
        let analyzer = Analyzer::builder()
            .build()
            .expect("Failed to build analyzer");

        assert_eq!(analyzer.paths(), &[PathBuf::from(".")]);
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let err = Analyzer::builder()
            .exclude("[")
            .build()
            .err()
            .expect("invalid pattern");
        assert!(matches!(err, AnalyzerError::Glob(_)));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .exclude("**/cache/**")
            .exclude("*.tpl.php")
            .build()
            .expect("Failed to build analyzer");
        let root = Path::new("/foo");

        assert!(analyzer.should_exclude(root, Path::new("/foo/cache/a.php"), false));
        assert!(analyzer.should_exclude(root, Path::new("/foo/cache"), true));
        assert!(analyzer.should_exclude(root, Path::new("/foo/vendor/lib.php"), false));
        assert!(analyzer.should_exclude(root, Path::new("/foo/node_modules"), true));
        assert!(analyzer.should_exclude(root, Path::new("/foo/lib/page.tpl.php"), false));
        assert!(!analyzer.should_exclude(root, Path::new("/foo/lib/lib.php"), false));
    }

    #[test]
    fn test_bare_names_match_whole_components() {
        let analyzer = Analyzer::builder()
            .exclude("vendor")
            .build()
            .expect("Failed to build analyzer");
        let root = Path::new("/work/vendor/project");

        assert!(!analyzer.should_exclude(root, Path::new("/work/vendor/project/lib/vendorlist.php"), false));
        assert!(!analyzer.should_exclude(root, Path::new("/work/vendor/project/lib/a.php"), false));
        assert!(!analyzer.should_exclude(root, Path::new("/work/vendor/project/vendor.php"), false));
        assert!(analyzer.should_exclude(root, Path::new("/work/vendor/project/lib/vendor"), true));
        assert!(analyzer.should_exclude(root, Path::new("/work/vendor/project/vendor/x/a.php"), false));
    }

    #[test]
    fn test_exclude_pattern_forms() {
        assert!(matches!(Exclude::parse("vendor"), Ok(Exclude::Dir(name)) if name == "vendor"));
        assert!(matches!(Exclude::parse("**/.git/**"), Ok(Exclude::Dir(name)) if name == ".git"));
        assert!(matches!(Exclude::parse("node_modules/"), Ok(Exclude::Dir(name)) if name == "node_modules"));
        assert!(matches!(Exclude::parse("**/gen/*.php"), Ok(Exclude::Glob(_))));
        assert!(matches!(Exclude::parse("lib/legacy"), Ok(Exclude::Glob(_))));
    }

    #[test]
    fn test_extension_filter() {
        let analyzer = Analyzer::builder()
            .extension("php")
            .extension("inc")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.has_extension(Path::new("a.PHP")));
        assert!(analyzer.has_extension(Path::new("b.inc")));
        assert!(!analyzer.has_extension(Path::new("c.js")));
        assert!(!analyzer.has_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_selected_rules_override_registry() {
        struct Named(&'static str);

        impl crate::Rule for Named {
            fn code(&self) -> &'static str {
                self.0
            }
            fn validate(&self, _file: &PhpFile) -> Vec<crate::ViolationArgs> {
                vec![crate::ViolationArgs::new()]
            }
        }

        let mut registry = RuleRegistry::new();
        registry.add_rule(Named("one")).expect("register");
        registry.add_rule(Named("two")).expect("register");
        registry.enable_all_rules();

        let analyzer = Analyzer::builder()
            .registry(registry)
            .select_rules(["two", "unknown"])
            .build()
            .expect("build");
        let codes: Vec<&str> = analyzer.registry().enabled_rules().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["two"]);
        assert_eq!(analyzer.check_source("a.php", "").len(), 1);
    }

    #[test]
    fn test_check_source_without_rules() {
        let analyzer = Analyzer::builder().build().expect("build");
        assert!(analyzer
            .check_source("a.php", "<?php class Foo {}")
            .is_empty());
    }
}
