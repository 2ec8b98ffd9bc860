//! Locates and loads `phpdoc-check.toml`.
//!
//! Lookup order:
//!
//! 1. `--config <file>`
//! 2. `phpdoc-check.toml` or `.phpdoc-check.toml` in the project directory
//!    or the nearest ancestor that has one
//! 3. `config.toml` in `$PHPDOC_CHECK_CONFIG_DIR` or `~/.phpdoc-check/`
//! 4. built-in defaults
//!
//! A relative `analyzer.root` in a project config is resolved against the
//! directory holding that file.

use anyhow::{Context, Result};
use phpdoc_check_core::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project directory or one of its ancestors.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "{}", p.display()),
            Self::Project(p) => write!(f, "{} (project)", p.display()),
            Self::Global(p) => write!(f, "{} (global)", p.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["phpdoc-check.toml", ".phpdoc-check.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Finds and parses the configuration for a run over `project_dir`.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed. An
/// explicit `--config` path that does not exist is an error too.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<(ConfigSource, Config)> {
    load_from(project_dir, explicit, global_config_dir())
}

fn load_from(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> Result<(ConfigSource, Config)> {
    let source = locate(project_dir, explicit, global_dir);
    let config = match &source {
        ConfigSource::Default => Config::default(),
        ConfigSource::Explicit(path) | ConfigSource::Global(path) => read(path)?,
        ConfigSource::Project(path) => {
            let mut config = read(path)?;
            if let Some(dir) = path.parent() {
                config.analyzer.root = anchor(&config.analyzer.root, dir);
            }
            config
        }
    };
    Ok((source, config))
}

fn anchor(root: &Path, dir: &Path) -> PathBuf {
    if root.is_absolute() {
        root.to_path_buf()
    } else if root == Path::new(".") {
        dir.to_path_buf()
    } else {
        dir.join(root)
    }
}

fn read(path: &Path) -> Result<Config> {
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn locate(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let mut dirs = vec![project_dir.to_path_buf()];
    if let Ok(canonical) = project_dir.canonicalize() {
        dirs.extend(canonical.ancestors().skip(1).map(Path::to_path_buf));
    }
    for dir in dirs {
        let found = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        if let Some(path) = found {
            return ConfigSource::Project(path);
        }
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|path| path.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// `$PHPDOC_CHECK_CONFIG_DIR`, else `~/.phpdoc-check/`.
fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("PHPDOC_CHECK_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".phpdoc-check"))
}
