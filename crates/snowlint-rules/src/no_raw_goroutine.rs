//! Rule to forbid raw goroutines.
//!
//! Every `go` statement spawns an unmanaged goroutine. Work should be handed
//! to a goroutine pool instead so that concurrency stays bounded.

use snowlint_core::{FileContext, Reporter, RuleId, Span};

pub(crate) fn check(ctx: &FileContext<'_>, span: Span, reporter: &mut Reporter<'_>) {
    reporter.report(
        RuleId::NoRawGoroutine,
        ctx.path,
        span,
        "should not use raw goroutine, use goroutine pool instead",
    );
}
