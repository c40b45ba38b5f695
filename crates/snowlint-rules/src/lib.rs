//! # snowlint-rules
//!
//! Go convention rules and the engine that runs them.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SN001 | `no-raw-goroutine` | Forbids raw `go` statements |
//! | SN002 | `no-exported-global` | Forbids exported package-level variables |
//! | SN003 | `banned-package-name` | Forbids vague package names such as `util` |
//! | SN004 | `banned-import` | Forbids deprecated imports |
//! | SN005 | `context-first` | Requires `ctx` to be the first parameter |
//! | SN006 | `missing-context` | Requires `New…` constructors to take `ctx` |
//! | SN007 | `error-last` | Requires `error` to be the last result |
//! | SN008 | `no-else` | Forbids `else` at the top of function bodies |
//! | SN009 | `no-bare-err-return` | Forbids returning `err` unwrapped |
//! | SN010 | `make-arity` | Requires `make` to be given a size |
//! | SN011 | `layer-same-depth` | Forbids imports between sibling packages of a group |
//! | SN012 | `layer-dependency` | Enforces the `model`/`gen` → `lib` → `internal` → `cmd` order |
//! | SN013 | `error-contract` | Pairs `FooError` structs with `IsFooError` functions |
//! | SN014 | `operation-pair` | Pairs `Request`/`Reply`, `Send`/`Receive`, `Publish`/`Subscribe` |
//!
//! ## Usage
//!
//! ```ignore
//! use snowlint_core::Config;
//! use snowlint_rules::Engine;
//!
//! let engine = Engine::new(Config::default());
//! let result = engine.check(&package);
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod banned_import;
mod banned_package_name;
mod context_param;
mod engine;
mod error_last;
mod layering;
mod make_arity;
mod no_bare_err_return;
mod no_else;
mod no_exported_global;
mod no_raw_goroutine;

pub mod error_contract;
pub mod naming;
pub mod operation_pair;

pub use banned_import::{replacement_for, BANNED_IMPORTS};
pub use banned_package_name::{banned_reason, BANNED_PACKAGE_NAMES};
pub use context_param::is_constructor;
pub use engine::Engine;
pub use error_contract::{is_checker, ErrorContractRegistry};
pub use layering::{check_import, forbidden_imports, LayerViolation};
pub use operation_pair::OperationPairRegistry;

/// Re-export core types for convenience.
pub use snowlint_core::{RuleId, Severity, Violation};
