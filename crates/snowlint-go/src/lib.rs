//! # snowlint-go
//!
//! Go frontend for snowlint.
//!
//! This crate turns a directory of Go code into the [`Package`] values the
//! engine in `snowlint-rules` checks:
//!
//! - [`SourceParser`] trait for pluggable frontends
//! - [`GoParser`], a Tree-sitter based Go parser producing the engine's
//!   syntax tree
//! - [`GoModule`] for `go.mod` discovery
//! - [`load_packages`] to walk a tree and group files into packages
//!
//! [`Package`]: snowlint_core::Package

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod go;
pub mod gomod;
pub mod loader;
pub mod parser;

pub use go::GoParser;
pub use gomod::GoModule;
pub use loader::{load_packages, LoadError, LoadOptions, LoadedPackages, SkippedFile};
pub use parser::{ParseError, SourceParser};
