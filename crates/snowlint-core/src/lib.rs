//! # snowlint-core
//!
//! Core framework for convention linting of Go packages.
//!
//! This crate provides the types shared by the engine, the language
//! frontend and the CLI:
//!
//! - [`syntax`]: the tagged syntax tree the engine walks
//! - [`package_path`]: group/remainder classification of package paths
//! - [`DiagnosticSink`] and [`Reporter`]: where violations go
//! - [`RuleId`]: the closed set of rules with their codes and severities
//! - [`Violation`] and [`LintResult`]: lint findings
//!
//! The rules themselves and the traversal engine live in `snowlint-rules`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod rule;
mod sink;
mod types;

pub mod package_path;
pub mod syntax;

pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use package_path::{classify, Group, PackagePath};
pub use rule::RuleId;
pub use sink::{DiagnosticSink, Reporter};
pub use syntax::{Package, SourceFile, Span, SyntaxNode};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
