//! Rules for the `ctx` parameter.
//!
//! - a `ctx` parameter, when present, must be the first one;
//! - `New…` constructors must take a `ctx` parameter at all.
//!
//! Parameters are looked at per field: in `(a, ctx int)` the field's first
//! name is `a`, so no `ctx` parameter is seen.

use snowlint_core::syntax::FuncDecl;
use snowlint_core::{FileContext, Reporter, RuleId, Span};

/// Name the context parameter must have.
pub const CONTEXT_PARAM: &str = "ctx";

/// Prefix of constructor functions.
pub const CONSTRUCTOR_PREFIX: &str = "New";

/// Whether `name` is a constructor.
#[must_use]
pub fn is_constructor(name: &str) -> bool {
    name.starts_with(CONSTRUCTOR_PREFIX)
}

/// Index of the first field whose first name is `ctx`.
fn context_position(func: &FuncDecl) -> Option<usize> {
    func.params
        .iter()
        .position(|p| p.first_name() == Some(CONTEXT_PARAM))
}

pub(crate) fn check(
    ctx: &FileContext<'_>,
    func: &FuncDecl,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    let position = context_position(func);

    if is_constructor(&func.name) && position.is_none() {
        reporter.report(
            RuleId::MissingContext,
            ctx.path,
            span,
            "missing context.Context parameter",
        );
    }

    if position.is_some_and(|i| i != 0) {
        reporter.report(
            RuleId::ContextFirst,
            ctx.path,
            span,
            "context.Context should be the first parameter",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run;
    use snowlint_core::syntax::{Field, TypeRef};

    fn func(name: &str, params: Vec<Field>) -> FuncDecl {
        FuncDecl {
            name: name.into(),
            params,
            results: vec![],
        }
    }

    fn field(names: &[&str]) -> Field {
        Field::new(names.iter().copied(), TypeRef::Other)
    }

    fn check_func(f: &FuncDecl) -> Vec<String> {
        run("shop/lib/client", |c, reporter| check(c, f, Span::at(10, 1), reporter))
            .into_iter()
            .map(|v| v.rule)
            .collect()
    }

    #[test]
    fn ctx_first_passes() {
        let f = func("Fetch", vec![field(&["ctx"]), field(&["id"])]);
        assert!(check_func(&f).is_empty());
    }

    #[test]
    fn ctx_not_first_is_reported() {
        let f = func("Fetch", vec![field(&["id"]), field(&["ctx"])]);
        assert_eq!(check_func(&f), vec!["context-first"]);
    }

    #[test]
    fn ctx_hidden_behind_other_name_is_not_seen() {
        let f = func("Fetch", vec![field(&["id", "ctx"])]);
        assert!(check_func(&f).is_empty());
    }

    #[test]
    fn constructor_without_ctx_is_reported() {
        let f = func("NewClient", vec![field(&["addr"])]);
        assert_eq!(check_func(&f), vec!["missing-context"]);
    }

    #[test]
    fn constructor_with_misplaced_ctx_reports_position_only() {
        let f = func("NewClient", vec![field(&["addr"]), field(&["ctx"])]);
        assert_eq!(check_func(&f), vec!["context-first"]);
    }

    #[test]
    fn constructor_with_ctx_passes() {
        let f = func("NewClient", vec![field(&["ctx"]), field(&["addr"])]);
        assert!(check_func(&f).is_empty());
    }

    #[test]
    fn plain_function_without_ctx_passes() {
        let f = func("parse", vec![field(&["s"])]);
        assert!(check_func(&f).is_empty());
    }
}
