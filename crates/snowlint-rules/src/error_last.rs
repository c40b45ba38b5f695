//! Rule requiring `error` to be the last result.

use snowlint_core::syntax::FuncDecl;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// Name of the builtin error type.
pub const ERROR_TYPE: &str = "error";

pub(crate) fn check(
    ctx: &FileContext<'_>,
    func: &FuncDecl,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    let has_error = func.results.iter().any(|r| r.ty.is_named(ERROR_TYPE));
    let error_is_last = func
        .results
        .last()
        .is_some_and(|r| r.ty.is_named(ERROR_TYPE));

    if has_error && !error_is_last {
        reporter.report(
            RuleId::ErrorLast,
            ctx.path,
            span,
            "error should be the last return value",
        );
    }
}
