//! Language-agnostic parser trait.
//!
//! `SourceParser` is the extension point for frontends: it turns source text
//! into the [`SourceFile`] tree the engine walks.

use std::path::Path;

use snowlint_core::SourceFile;
use thiserror::Error;

/// Errors produced while parsing one file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(String),

    /// The parser returned no tree.
    #[error("parser produced no tree")]
    ParseFailed,

    /// The source contains a syntax error.
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// The file has no package clause.
    #[error("missing package clause")]
    MissingPackage,

    /// The file is not valid UTF-8.
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        offset: usize,
    },
}

/// Trait for language frontends.
///
/// Implementations are cheap to share across threads; any parser state is
/// created per call.
pub trait SourceParser: Send + Sync {
    /// File extensions this parser handles (e.g., `&[".go"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source`, read from `path`, into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the source is not valid.
    fn parse(&self, path: &Path, source: &str) -> Result<SourceFile, ParseError>;

    /// Whether this parser handles `path`, judged by its extension.
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions().iter().any(|e| e.strip_prefix('.') == Some(ext)))
    }
}
