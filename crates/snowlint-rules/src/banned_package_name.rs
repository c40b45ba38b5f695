//! Rule to forbid generic package names.

use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// Package names that say nothing about their content, with the reason.
pub const BANNED_PACKAGE_NAMES: &[(&str, &str)] =
    &[("util", "use a more descriptive package name")];

/// Returns the reason `name` is banned, if it is.
#[must_use]
pub fn banned_reason(name: &str) -> Option<&'static str> {
    BANNED_PACKAGE_NAMES
        .iter()
        .find(|(banned, _)| *banned == name)
        .map(|(_, reason)| *reason)
}

/// Checks the last segment of the file's package path.
pub(crate) fn check(ctx: &FileContext<'_>, span: Span, reporter: &mut Reporter<'_>) {
    let Some(name) = ctx.package.last_segment() else {
        return;
    };

    if let Some(reason) = banned_reason(name) {
        reporter.report(
            RuleId::BannedPackageName,
            ctx.path,
            span,
            format!("should not use {name} to package name, {reason}"),
        );
    }
}
