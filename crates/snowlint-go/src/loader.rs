//! Package loading.
//!
//! Walks a directory tree, parses every `.go` file and groups the files into
//! packages by directory and package clause. A package's import path is the
//! module path joined with the directory relative to the module root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use snowlint_core::{AnalyzerConfig, Package, SourceFile};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::go::GoParser;
use crate::gomod::GoModule;
use crate::parser::{ParseError, SourceParser};

/// Suffix of Go test files.
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Suffix of external test package names.
const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Errors produced while loading packages.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file or directory could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An exclude pattern is not a valid glob.
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The directory walk failed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// A file failed to parse and parse errors are fatal.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: ParseError,
    },

    /// The root to load is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Options controlling which files are loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Glob patterns of files to skip, matched against the path relative to
    /// the root and against the full path.
    pub exclude: Vec<String>,
    /// Module path to use instead of the one from `go.mod`.
    pub module: Option<String>,
    /// Honor `.gitignore` files.
    pub respect_gitignore: bool,
    /// Load `_test.go` files.
    pub include_tests: bool,
    /// Fail on the first file that does not parse instead of skipping it.
    pub fail_on_parse_error: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from(&AnalyzerConfig::default())
    }
}

impl From<&AnalyzerConfig> for LoadOptions {
    fn from(config: &AnalyzerConfig) -> Self {
        Self {
            exclude: config.exclude.clone(),
            module: config.module.clone(),
            respect_gitignore: config.respect_gitignore,
            include_tests: config.include_tests,
            fail_on_parse_error: false,
        }
    }
}

/// A file that was skipped because it did not parse.
#[derive(Debug)]
pub struct SkippedFile {
    /// File path, relative to the root.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: ParseError,
}

/// Result of [`load_packages`].
#[derive(Debug)]
pub struct LoadedPackages {
    /// Root that was walked.
    pub root: PathBuf,
    /// Module the packages belong to.
    pub module: GoModule,
    /// Packages, ordered by directory then package name.
    pub packages: Vec<Package>,
    /// Files that could not be parsed.
    pub skipped: Vec<SkippedFile>,
}

impl LoadedPackages {
    /// Total number of loaded files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.packages.iter().map(|p| p.files.len()).sum()
    }
}

/// Loads every Go package under `root`.
///
/// File paths in the returned packages are relative to `root`.
///
/// # Errors
///
/// Returns [`LoadError`] if the tree cannot be walked, a file cannot be
/// read, an exclude pattern is invalid, or (with
/// [`LoadOptions::fail_on_parse_error`]) a file does not parse.
pub fn load_packages(root: &Path, options: &LoadOptions) -> Result<LoadedPackages, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }
    let absolute = root.canonicalize().map_err(|source| LoadError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let module = resolve_module(&absolute, options)?;
    info!("Loading packages of module {} from {}", module.path, root.display());

    let exclude = options
        .exclude
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let parser = GoParser::new();
    let mut groups: BTreeMap<(PathBuf, String), Vec<SourceFile>> = BTreeMap::new();
    let mut skipped = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .git_global(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !parser.handles(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if exclude
            .iter()
            .any(|p| p.matches_path(rel) || p.matches_path(path))
        {
            debug!("Excluding: {}", rel.display());
            continue;
        }
        if !options.include_tests && is_test_file(rel) {
            continue;
        }

        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = match String::from_utf8(bytes) {
            Ok(source) => parser.parse(rel, &source),
            Err(e) => Err(ParseError::InvalidUtf8 {
                offset: e.utf8_error().valid_up_to(),
            }),
        };

        let file = match parsed {
            Ok(file) => file,
            Err(error) => {
                warn!("Failed to parse {}: {}", rel.display(), error);
                if options.fail_on_parse_error {
                    return Err(LoadError::Parse {
                        path: rel.to_path_buf(),
                        source: error,
                    });
                }
                skipped.push(SkippedFile {
                    path: rel.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        let dir = rel.parent().unwrap_or(Path::new("")).to_path_buf();
        groups
            .entry((dir, file.package_name.clone()))
            .or_default()
            .push(file);
    }

    let packages: Vec<Package> = groups
        .into_iter()
        .map(|((dir, name), files)| {
            let mut path = module.package_path(&absolute.join(&dir));
            if name.ends_with(TEST_PACKAGE_SUFFIX) {
                path.push_str(TEST_PACKAGE_SUFFIX);
            }
            Package { path, files }
        })
        .collect();

    let loaded = LoadedPackages {
        root: root.to_path_buf(),
        module,
        packages,
        skipped,
    };
    info!(
        "Loaded {} files in {} packages ({} skipped)",
        loaded.file_count(),
        loaded.packages.len(),
        loaded.skipped.len()
    );
    Ok(loaded)
}

/// Module from the options, else from `go.mod`, else named after `root`.
fn resolve_module(root: &Path, options: &LoadOptions) -> Result<GoModule, LoadError> {
    if let Some(path) = &options.module {
        return Ok(GoModule {
            path: path.clone(),
            root: root.to_path_buf(),
        });
    }
    if let Some(module) = GoModule::discover(root)? {
        return Ok(module);
    }

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    warn!("No go.mod found above {}, using module path {:?}", root.display(), name);
    Ok(GoModule {
        path: name,
        root: root.to_path_buf(),
    })
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEST_FILE_SUFFIX))
}
