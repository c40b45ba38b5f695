//! Error-contract registry.
//!
//! Every exported struct `FooError` must come with an `IsFooError` checker
//! function, and every `IsFooError` checker must have its struct. Both sides
//! are collected while the package is walked and matched in
//! [`ErrorContractRegistry::reconcile`].

use std::collections::BTreeMap;

use snowlint_core::syntax::TypeSpec;
use snowlint_core::{FileContext, Location, Reporter, RuleId, Span};

use crate::naming::is_exported;

/// Suffix of error type names.
pub const ERROR_SUFFIX: &str = "Error";

/// Prefix of checker function names.
pub const CHECKER_PREFIX: &str = "Is";

/// Whether `name` is an `Is…Error` checker function.
#[must_use]
pub fn is_checker(name: &str) -> bool {
    name.starts_with(CHECKER_PREFIX) && name.ends_with(ERROR_SUFFIX)
}

/// Error structs and checker functions seen in one package.
#[derive(Debug, Default)]
pub struct ErrorContractRegistry {
    structs: BTreeMap<String, Location>,
    checkers: BTreeMap<String, Location>,
}

impl ErrorContractRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `spec` if it declares an exported `…Error` struct.
    ///
    /// A later declaration of the same name replaces the earlier one.
    pub fn record_type(&mut self, ctx: &FileContext<'_>, spec: &TypeSpec, span: Span) {
        if spec.is_struct && is_exported(&spec.name) && spec.name.ends_with(ERROR_SUFFIX) {
            self.structs.insert(
                spec.name.clone(),
                Location::from_span(ctx.path.to_path_buf(), span),
            );
        }
    }

    /// Records `name` if it is a checker function. Returns whether it was one.
    ///
    /// The first declaration of a checker is kept.
    pub fn record_checker(&mut self, ctx: &FileContext<'_>, name: &str, span: Span) -> bool {
        if !is_checker(name) {
            return false;
        }
        self.checkers
            .entry(name.to_string())
            .or_insert_with(|| Location::from_span(ctx.path.to_path_buf(), span));
        true
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.checkers.is_empty()
    }

    /// Reports unmatched structs, then unmatched checkers, in name order.
    pub fn reconcile(mut self, reporter: &mut Reporter<'_>) {
        for (name, location) in &self.structs {
            let checker = format!("{CHECKER_PREFIX}{name}");
            if self.checkers.remove(&checker).is_none() {
                reporter.report_at(
                    RuleId::ErrorContract,
                    location.clone(),
                    format!("missing {checker} function"),
                );
            }
        }

        for (name, location) in self.checkers {
            let error = name.strip_prefix(CHECKER_PREFIX).unwrap_or(name.as_str());
            if !self.structs.contains_key(error) {
                reporter.report_at(
                    RuleId::ErrorContract,
                    location,
                    format!("missing {error} struct"),
                );
            }
        }
    }
}
