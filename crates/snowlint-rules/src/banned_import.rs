//! Rule to forbid imports of legacy or duplicate packages.

use snowlint_core::syntax::ImportSpec;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// Banned import paths with their replacement.
pub const BANNED_IMPORTS: &[(&str, &str)] = &[
    ("github.com/pkg/errors", "use fmt.Errorf and errors instead"),
    ("io/ioutil", "use os or package io instead"),
];

/// Returns the suggested replacement for `path`, if it is banned.
#[must_use]
pub fn replacement_for(path: &str) -> Option<&'static str> {
    BANNED_IMPORTS
        .iter()
        .find(|(banned, _)| *banned == path)
        .map(|(_, replacement)| *replacement)
}

pub(crate) fn check(
    ctx: &FileContext<'_>,
    import: &ImportSpec,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    if let Some(replacement) = replacement_for(&import.path) {
        reporter.report_with_help(
            RuleId::BannedImport,
            ctx.path,
            span,
            format!("should not use {}, {replacement}", import.path),
            replacement,
        );
    }
}
