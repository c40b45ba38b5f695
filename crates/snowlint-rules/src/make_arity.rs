//! Rule requiring `make` to be called with a size argument.

use snowlint_core::syntax::CallExpr;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// The builtin allocating slices, maps and channels.
pub const MAKE_BUILTIN: &str = "make";

pub(crate) fn check(
    ctx: &FileContext<'_>,
    call: &CallExpr,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    if call.callee.is_ident(MAKE_BUILTIN) && call.arg_count < 2 {
        reporter.report(
            RuleId::MakeArity,
            ctx.path,
            span,
            "make function should be called with 2 arguments",
        );
    }
}
