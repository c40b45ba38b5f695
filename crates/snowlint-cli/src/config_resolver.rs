//! Configuration file resolution with global fallback.
//!
//! Resolution order, first match wins:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `snowlint.toml` or `.snowlint.toml` in the checked directory or the
//!    nearest ancestor that has one
//! 3. `config.toml` in the global directory (`$SNOWLINT_CONFIG_DIR`, else
//!    `~/.snowlint/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order within a directory.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["snowlint.toml", ".snowlint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
const CONFIG_DIR_ENV: &str = "SNOWLINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the code.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// Path of the config file, if there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether the config comes from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the configuration for checking `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(project_dir, explicit, global_config_dir().as_deref())
}

/// Resolution with the global directory passed in, so tests need no
/// environment variables.
fn resolve_with(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = find_project_config(project_dir) {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    let global = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file());
    if let Some(path) = global {
        tracing::debug!("Found global config: {}", path.display());
        return ConfigSource::Global(path);
    }

    ConfigSource::Default
}

/// Nearest project config at or above `dir`.
fn find_project_config(dir: &Path) -> Option<PathBuf> {
    let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    start.ancestors().find_map(|ancestor| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| ancestor.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Global config directory: `$SNOWLINT_CONFIG_DIR`, else `~/.snowlint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".snowlint"))
}
