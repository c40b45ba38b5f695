//! Rule to forbid exported package-level variables.
//!
//! Only the first name of a `var` spec is looked at, so `var cache, Hits int`
//! passes while `var Hits, cache int` does not.

use snowlint_core::syntax::VarSpec;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

use crate::naming::is_exported;

pub(crate) fn check(
    ctx: &FileContext<'_>,
    spec: &VarSpec,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    let Some(name) = spec.names.first() else {
        return;
    };

    if is_exported(name) {
        reporter.report(
            RuleId::NoExportedGlobal,
            ctx.path,
            span,
            format!("global variable or local temparary value {name} should not be exported or pascal case"),
        );
    }
}
