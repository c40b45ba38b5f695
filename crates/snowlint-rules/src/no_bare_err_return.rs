//! Rule to forbid returning `err` unchanged.
//!
//! Errors should be wrapped where they are returned (`fmt.Errorf("...: %w",
//! err)`), so `return err` and `return nil, err` are reported. Each bare
//! `err` in the statement produces its own violation.

use snowlint_core::syntax::ReturnStmt;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// Identifier conventionally holding an error.
pub const ERROR_IDENT: &str = "err";

pub(crate) fn check(
    ctx: &FileContext<'_>,
    stmt: &ReturnStmt,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    for result in &stmt.results {
        if result.is_ident(ERROR_IDENT) {
            reporter.report(
                RuleId::NoBareErrReturn,
                ctx.path,
                span,
                "should not return error, use fmt.Errorf instead",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run;
    use snowlint_core::syntax::Expr;

    fn check_results(results: Vec<Expr>) -> usize {
        let stmt = ReturnStmt { results };
        run("shop/internal/store", |ctx, reporter| {
            check(ctx, &stmt, Span::at(8, 3), reporter);
        })
        .len()
    }

    #[test]
    fn bare_err_is_reported() {
        assert_eq!(check_results(vec![Expr::Ident("err".into())]), 1);
        assert_eq!(
            check_results(vec![Expr::Ident("nil".into()), Expr::Ident("err".into())]),
            1
        );
    }

    #[test]
    fn wrapped_or_other_names_pass() {
        assert_eq!(check_results(vec![Expr::Other]), 0);
        assert_eq!(check_results(vec![Expr::Ident("errNotFound".into())]), 0);
        assert_eq!(check_results(vec![]), 0);
    }
}
