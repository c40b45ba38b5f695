//! Traversal driver.
//!
//! [`Engine::check_package`] walks every file of a package once, depth
//! first, dispatching each node to the rules interested in its kind. Rules
//! without cross-file state report immediately; error contracts and
//! operation pairs are collected and reconciled after the last file.

use snowlint_core::syntax::{FuncDecl, NodeKind};
use snowlint_core::{
    Config, DiagnosticSink, FileContext, LintResult, Package, Reporter, SourceFile, SyntaxNode,
};
use tracing::{debug, info};

use crate::context_param::{self, is_constructor};
use crate::error_contract::ErrorContractRegistry;
use crate::operation_pair::OperationPairRegistry;
use crate::{
    banned_import, banned_package_name, error_last, layering, make_arity, no_bare_err_return,
    no_else, no_exported_global, no_raw_goroutine,
};

/// Runs every rule over packages.
///
/// The engine only holds configuration, so one instance can check any
/// number of packages, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Checks `package` and collects the violations.
    #[must_use]
    pub fn check(&self, package: &Package) -> LintResult {
        let mut result = LintResult::new();
        self.check_package(package, &mut result);
        result.files_checked = package.files.len();
        result.packages_checked = 1;
        result
    }

    /// Checks `package`, sending violations to `sink` in emission order.
    pub fn check_package(&self, package: &Package, sink: &mut dyn DiagnosticSink) {
        let mut run = Run {
            reporter: Reporter::new(sink, &self.config),
            contracts: ErrorContractRegistry::new(),
            pairs: OperationPairRegistry::new(),
        };

        for file in &package.files {
            run.check_file(package, file);
        }
        let reported = run.finish();

        info!(
            "Checked package {}: {} violations in {} files",
            package.path,
            reported,
            package.files.len()
        );
    }
}

/// State of one package check.
struct Run<'a> {
    reporter: Reporter<'a>,
    contracts: ErrorContractRegistry,
    pairs: OperationPairRegistry,
}

impl Run<'_> {
    fn check_file(&mut self, package: &Package, file: &SourceFile) {
        debug!("Checking: {}", file.path.display());

        let ctx = FileContext::new(package, file);
        banned_package_name::check(&ctx, file.package_span, &mut self.reporter);
        self.walk(&ctx, &file.root, 0);
    }

    /// Visits `node`, then its children. `func_depth` counts the enclosing
    /// function declarations and literals.
    fn walk(&mut self, ctx: &FileContext<'_>, node: &SyntaxNode, func_depth: usize) {
        self.visit(ctx, node, func_depth);

        let child_depth = match node.kind {
            NodeKind::FuncDecl(_) | NodeKind::FuncLit => func_depth + 1,
            _ => func_depth,
        };
        for child in &node.children {
            self.walk(ctx, child, child_depth);
        }
    }

    fn visit(&mut self, ctx: &FileContext<'_>, node: &SyntaxNode, func_depth: usize) {
        let reporter = &mut self.reporter;
        match &node.kind {
            NodeKind::GoStmt => no_raw_goroutine::check(ctx, node.span, reporter),
            NodeKind::ImportSpec(spec) => {
                banned_import::check(ctx, spec, node.span, reporter);
                layering::check(ctx, spec, node.span, reporter);
            }
            NodeKind::VarSpec(spec) if func_depth == 0 => {
                no_exported_global::check(ctx, spec, node.span, reporter);
            }
            NodeKind::TypeSpec(spec) => self.contracts.record_type(ctx, spec, node.span),
            NodeKind::FuncDecl(func) => self.visit_func(ctx, func, node),
            NodeKind::ReturnStmt(stmt) => no_bare_err_return::check(ctx, stmt, node.span, reporter),
            NodeKind::CallExpr(call) => make_arity::check(ctx, call, node.span, reporter),
            NodeKind::File
            | NodeKind::VarSpec(_)
            | NodeKind::FuncLit
            | NodeKind::Block
            | NodeKind::IfStmt(_)
            | NodeKind::Other(_) => {}
        }
    }

    fn visit_func(&mut self, ctx: &FileContext<'_>, func: &FuncDecl, node: &SyntaxNode) {
        let is_checker = self.contracts.record_checker(ctx, &func.name, node.span);
        if !is_checker && !is_constructor(&func.name) {
            self.pairs.record(ctx, &func.name, node.span);
        }

        context_param::check(ctx, func, node.span, &mut self.reporter);
        error_last::check(ctx, func, node.span, &mut self.reporter);
        if let Some(body) = node.body() {
            no_else::check(ctx, body, &mut self.reporter);
        }
    }

    /// Reconciles the registries and returns how many violations the run
    /// reported in total.
    fn finish(mut self) -> usize {
        self.contracts.reconcile(&mut self.reporter);
        self.pairs.reconcile(&mut self.reporter);
        self.reporter.reported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowlint_core::syntax::{
        CallExpr, Expr, Field, IfStmt, ImportSpec, TypeRef, TypeSpec, VarSpec,
    };
    use snowlint_core::{RuleConfig, Span, Violation};
    use std::path::PathBuf;

    fn node(kind: NodeKind, line: usize) -> SyntaxNode {
        SyntaxNode::new(kind, Span::at(line, 1))
    }

    fn func(name: &str, line: usize, body: Vec<SyntaxNode>) -> SyntaxNode {
        node(
            NodeKind::FuncDecl(FuncDecl {
                name: name.into(),
                params: vec![Field::new(["ctx"], TypeRef::Other)],
                results: vec![],
            }),
            line,
        )
        .with_children(vec![node(NodeKind::Block, line).with_children(body)])
    }

    fn source(name: &str, package_name: &str, items: Vec<SyntaxNode>) -> SourceFile {
        SourceFile {
            path: PathBuf::from(name),
            package_name: package_name.into(),
            package_span: Span::at(1, 1),
            root: node(NodeKind::File, 1).with_children(items),
        }
    }

    fn codes(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.code.as_str()).collect()
    }

    #[test]
    fn nested_var_spec_is_not_a_global() {
        let var = || node(NodeKind::VarSpec(VarSpec { names: vec!["Count".into()] }), 4);
        let package = Package::new("shop/lib/stats").with_file(source(
            "stats.go",
            "stats",
            vec![var(), func("run", 3, vec![var()])],
        ));

        let result = Engine::default().check(&package);
        assert_eq!(codes(&result.violations), vec!["SN002"]);
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.packages_checked, 1);
    }

    #[test]
    fn function_local_error_types_are_recorded() {
        let local = node(
            NodeKind::TypeSpec(TypeSpec {
                name: "LocalError".into(),
                is_struct: true,
            }),
            4,
        );
        let package = Package::new("shop/lib/stats").with_file(source(
            "stats.go",
            "stats",
            vec![func("run", 3, vec![local])],
        ));

        let result = Engine::default().check(&package);
        assert_eq!(codes(&result.violations), vec!["SN013"]);
        assert_eq!(result.violations[0].message, "missing IsLocalError function");
        assert_eq!(result.violations[0].location.line, 4);
    }

    #[test]
    fn func_literal_bodies_are_not_checked_for_else() {
        let if_else = node(NodeKind::IfStmt(IfStmt { has_else: true }), 5);
        let literal = node(NodeKind::FuncLit, 4)
            .with_children(vec![node(NodeKind::Block, 4).with_children(vec![if_else])]);
        let package = Package::new("shop/lib/stats").with_file(source(
            "stats.go",
            "stats",
            vec![func("run", 3, vec![literal])],
        ));

        assert!(Engine::default().check(&package).violations.is_empty());
    }

    #[test]
    fn go_statement_nested_deeply_is_found() {
        let go = node(NodeKind::GoStmt, 7);
        let wrapped = node(NodeKind::Other("for_statement"), 6)
            .with_children(vec![node(NodeKind::Block, 6).with_children(vec![go])]);
        let package = Package::new("shop/lib/stats").with_file(source(
            "stats.go",
            "stats",
            vec![func("run", 5, vec![wrapped])],
        ));

        let result = Engine::default().check(&package);
        assert_eq!(codes(&result.violations), vec!["SN001"]);
        assert_eq!(result.violations[0].location.line, 7);
    }

    #[test]
    fn registries_span_files_of_a_package() {
        let error_type = node(
            NodeKind::TypeSpec(TypeSpec {
                name: "NotFoundError".into(),
                is_struct: true,
            }),
            3,
        );
        let package = Package::new("shop/lib/store")
            .with_file(source("errors.go", "store", vec![error_type]))
            .with_file(source("check.go", "store", vec![func("IsNotFoundError", 3, vec![])]))
            .with_file(source("rpc.go", "store", vec![func("RequestItem", 3, vec![])]))
            .with_file(source("rpc_reply.go", "store", vec![func("ReplyItem", 9, vec![])]));

        let result = Engine::default().check(&package);
        assert!(result.violations.is_empty(), "{:?}", result.violations);
        assert_eq!(result.files_checked, 4);
    }

    #[test]
    fn pairs_are_scoped_by_package_clause() {
        let package = Package::new("shop/lib/store")
            .with_file(source("rpc.go", "store", vec![func("RequestItem", 3, vec![])]))
            .with_file(source("rpc_test.go", "store_test", vec![func("ReplyItem", 3, vec![])]));

        let messages: Vec<String> = Engine::default()
            .check(&package)
            .violations
            .into_iter()
            .map(|v| v.message)
            .collect();
        assert_eq!(
            messages,
            vec!["missing Reply function", "missing Request function"]
        );
    }

    #[test]
    fn checkers_and_constructors_are_not_pairs() {
        let package = Package::new("shop/lib/store").with_file(source(
            "store.go",
            "store",
            vec![
                func("NewSendQueue", 3, vec![]),
                func("IsSendError", 9, vec![]),
            ],
        ));

        let result = Engine::default().check(&package);
        assert_eq!(result.by_rule("operation-pair").len(), 0);
        assert_eq!(result.by_rule("error-contract").len(), 1);
    }

    #[test]
    fn deferred_violations_follow_immediate_ones() {
        let make = node(
            NodeKind::CallExpr(CallExpr {
                callee: Expr::Ident("make".into()),
                arg_count: 1,
            }),
            4,
        );
        let package = Package::new("shop/lib/store").with_file(source(
            "store.go",
            "store",
            vec![
                func("SendOrder", 3, vec![make]),
                node(
                    NodeKind::TypeSpec(TypeSpec {
                        name: "OrderError".into(),
                        is_struct: true,
                    }),
                    10,
                ),
            ],
        ));

        let result = Engine::default().check(&package);
        assert_eq!(codes(&result.violations), vec!["SN010", "SN013", "SN014"]);
    }

    #[test]
    fn disabled_rules_are_silent_and_streaming_sink_sees_the_rest() {
        let mut config = Config::default();
        config.rules.insert(
            "no-raw-goroutine".into(),
            RuleConfig {
                enabled: Some(false),
                severity: None,
            },
        );
        let import = node(
            NodeKind::ImportSpec(ImportSpec {
                path: "io/ioutil".into(),
            }),
            2,
        );
        let package = Package::new("shop/lib/files").with_file(source(
            "files.go",
            "files",
            vec![import, func("run", 4, vec![node(NodeKind::GoStmt, 5)])],
        ));

        let mut sink: Vec<Violation> = Vec::new();
        Engine::new(config).check_package(&package, &mut sink);
        assert_eq!(codes(&sink), vec!["SN004"]);
    }
}
