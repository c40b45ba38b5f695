//! `go.mod` discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::loader::LoadError;

/// Name of the module file.
pub const GO_MOD: &str = "go.mod";

/// A Go module: its import path and the directory holding `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    /// Module path from the `module` directive.
    pub path: String,
    /// Directory containing `go.mod`.
    pub root: PathBuf,
}

impl GoModule {
    /// Parses the `module` directive of a `go.mod` file located in `root`.
    ///
    /// Returns `None` if the file has no `module` directive.
    #[must_use]
    pub fn parse(root: impl Into<PathBuf>, contents: &str) -> Option<Self> {
        let path = contents.lines().find_map(|line| {
            let line = line.split("//").next().unwrap_or(line).trim();
            let rest = line.strip_prefix("module")?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let path = rest.trim().trim_matches(|c: char| c == '"' || c == '`');
            (!path.is_empty()).then_some(path)
        })?;

        Some(Self {
            path: path.to_owned(),
            root: root.into(),
        })
    }

    /// Finds the nearest `go.mod` at or above `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if a `go.mod` exists but cannot be read.
    pub fn discover(dir: &Path) -> Result<Option<Self>, LoadError> {
        for candidate in dir.ancestors() {
            let go_mod = candidate.join(GO_MOD);
            if !go_mod.is_file() {
                continue;
            }

            let contents = std::fs::read_to_string(&go_mod).map_err(|source| LoadError::Io {
                path: go_mod.clone(),
                source,
            })?;
            debug!("Found module file: {}", go_mod.display());
            return Ok(Self::parse(candidate, &contents));
        }
        Ok(None)
    }

    /// Import path of the package in `dir`.
    ///
    /// `dir` must be inside the module root; a directory outside it maps to
    /// the module path itself.
    #[must_use]
    pub fn package_path(&self, dir: &Path) -> String {
        let rel = dir.strip_prefix(&self.root).unwrap_or(Path::new(""));
        join_import_path(&self.path, rel)
    }
}

/// Joins a module path and a relative directory with `/`.
pub(crate) fn join_import_path(module: &str, rel: &Path) -> String {
    let mut path = module.to_owned();
    for component in rel.components() {
        let segment = component.as_os_str().to_string_lossy();
        if segment == "." {
            continue;
        }
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&segment);
    }
    path
}
