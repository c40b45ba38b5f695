//! Rule to forbid `else` branches at the top of function bodies.
//!
//! Only the statements directly inside a function declaration's body are
//! looked at. Branching there should use an early return or a `switch`.

use snowlint_core::syntax::{IfStmt, NodeKind};
use snowlint_core::{FileContext, Reporter, RuleId, SyntaxNode};

pub(crate) fn check(ctx: &FileContext<'_>, body: &SyntaxNode, reporter: &mut Reporter<'_>) {
    for stmt in &body.children {
        if let NodeKind::IfStmt(IfStmt { has_else: true }) = stmt.kind {
            reporter.report(
                RuleId::NoElse,
                ctx.path,
                stmt.span,
                "if statement should not have an else branch, use early return or switch statement instead",
            );
        }
    }
}
