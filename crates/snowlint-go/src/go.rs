//! Go frontend using Tree-sitter.
//!
//! Converts a tree-sitter-go concrete syntax tree into the engine's
//! [`SyntaxNode`] tree. Only named nodes are kept; comments are dropped and
//! the `statement_list` wrapper inside blocks is flattened so that a block's
//! children are its statements.

use std::path::Path;

use snowlint_core::syntax::{
    CallExpr, Expr, Field, FuncDecl, IfStmt, ImportSpec, NodeKind, ReturnStmt, TypeRef, TypeSpec,
    VarSpec,
};
use snowlint_core::{SourceFile, Span, SyntaxNode};
use tree_sitter::{Language, Node, Parser};

use crate::parser::{ParseError, SourceParser};

/// Parses Go source files.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
        node.utf8_text(src).unwrap_or("")
    }

    fn span(node: Node<'_>) -> Span {
        let start = node.start_position();
        Span {
            line: start.row + 1,
            column: start.column + 1,
            offset: node.start_byte(),
            length: node.end_byte() - node.start_byte(),
        }
    }

    /// Named children, without comments.
    fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|c| c.kind() != "comment")
            .collect()
    }

    fn field_text(node: Node<'_>, field: &str, src: &[u8]) -> String {
        node.child_by_field_name(field)
            .map(|n| Self::text(n, src).to_owned())
            .unwrap_or_default()
    }

    fn field_texts(node: Node<'_>, field: &str, src: &[u8]) -> Vec<String> {
        let mut cursor = node.walk();
        node.children_by_field_name(field, &mut cursor)
            .map(|n| Self::text(n, src).to_owned())
            .collect()
    }

    /// Strips the quotes of an interpreted or raw string literal.
    fn unquote(literal: &str) -> String {
        literal
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
            .unwrap_or(literal)
            .to_owned()
    }

    fn type_ref(node: Node<'_>, src: &[u8]) -> TypeRef {
        if node.kind() == "type_identifier" {
            TypeRef::Named(Self::text(node, src).to_owned())
        } else {
            TypeRef::Other
        }
    }

    fn expr(node: Node<'_>, src: &[u8]) -> Expr {
        if node.kind() == "identifier" {
            Expr::Ident(Self::text(node, src).to_owned())
        } else {
            Expr::Other
        }
    }

    /// Fields of a `parameter_list`.
    fn fields(list: Node<'_>, src: &[u8]) -> Vec<Field> {
        Self::named_children(list)
            .into_iter()
            .map(|decl| {
                let ty = decl
                    .child_by_field_name("type")
                    .map_or(TypeRef::Other, |t| Self::type_ref(t, src));
                Field::new(Self::field_texts(decl, "name", src), ty)
            })
            .collect()
    }

    /// A function result is either a parameter list or a single bare type.
    fn results(result: Node<'_>, src: &[u8]) -> Vec<Field> {
        if result.kind() == "parameter_list" {
            Self::fields(result, src)
        } else {
            vec![Field::new(Vec::<String>::new(), Self::type_ref(result, src))]
        }
    }

    fn func_decl(node: Node<'_>, src: &[u8]) -> FuncDecl {
        FuncDecl {
            name: Self::field_text(node, "name", src),
            params: node
                .child_by_field_name("parameters")
                .map(|p| Self::fields(p, src))
                .unwrap_or_default(),
            results: node
                .child_by_field_name("result")
                .map(|r| Self::results(r, src))
                .unwrap_or_default(),
        }
    }

    fn return_values(node: Node<'_>, src: &[u8]) -> Vec<Expr> {
        let mut values = Vec::new();
        for child in Self::named_children(node) {
            if child.kind() == "expression_list" {
                values.extend(
                    Self::named_children(child)
                        .into_iter()
                        .map(|e| Self::expr(e, src)),
                );
            } else {
                values.push(Self::expr(child, src));
            }
        }
        values
    }

    fn call_expr(node: Node<'_>, src: &[u8]) -> CallExpr {
        CallExpr {
            callee: node
                .child_by_field_name("function")
                .map_or(Expr::Other, |f| Self::expr(f, src)),
            arg_count: node
                .child_by_field_name("arguments")
                .map_or(0, |args| Self::named_children(args).len()),
        }
    }

    fn node_kind(node: Node<'_>, src: &[u8]) -> NodeKind {
        match node.kind() {
            "source_file" => NodeKind::File,
            "function_declaration" | "method_declaration" => {
                NodeKind::FuncDecl(Self::func_decl(node, src))
            }
            "func_literal" => NodeKind::FuncLit,
            "block" => NodeKind::Block,
            "var_spec" => NodeKind::VarSpec(VarSpec {
                names: Self::field_texts(node, "name", src),
            }),
            "type_spec" | "type_alias" => NodeKind::TypeSpec(TypeSpec {
                name: Self::field_text(node, "name", src),
                is_struct: node
                    .child_by_field_name("type")
                    .is_some_and(|t| t.kind() == "struct_type"),
            }),
            "import_spec" => NodeKind::ImportSpec(ImportSpec {
                path: Self::unquote(&Self::field_text(node, "path", src)),
            }),
            "go_statement" => NodeKind::GoStmt,
            "if_statement" => NodeKind::IfStmt(IfStmt {
                has_else: node.child_by_field_name("alternative").is_some(),
            }),
            "return_statement" => NodeKind::ReturnStmt(ReturnStmt {
                results: Self::return_values(node, src),
            }),
            "call_expression" => NodeKind::CallExpr(Self::call_expr(node, src)),
            other => NodeKind::Other(other),
        }
    }

    fn convert(node: Node<'_>, src: &[u8]) -> SyntaxNode {
        let is_block = node.kind() == "block";
        let mut children = Vec::new();
        for child in Self::named_children(node) {
            if is_block && child.kind() == "statement_list" {
                children.extend(
                    Self::named_children(child)
                        .into_iter()
                        .map(|stmt| Self::convert(stmt, src)),
                );
            } else {
                children.push(Self::convert(child, src));
            }
        }

        SyntaxNode::new(Self::node_kind(node, src), Self::span(node)).with_children(children)
    }

    /// Package identifier and the span of the package clause.
    fn package_clause(root: Node<'_>, src: &[u8]) -> Option<(String, Span)> {
        let clause = Self::named_children(root)
            .into_iter()
            .find(|c| c.kind() == "package_clause")?;
        let ident = Self::named_children(clause).into_iter().next()?;
        Some((Self::text(ident, src).to_owned(), Self::span(clause)))
    }

    /// First error or missing node, in source order.
    fn first_error(node: Node<'_>) -> Option<Node<'_>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(Self::first_error)
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for GoParser {
    fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SourceFile, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::ParseFailed)?;
        let root = tree.root_node();

        if let Some(error) = Self::first_error(root) {
            let span = Self::span(error);
            return Err(ParseError::Syntax {
                line: span.line,
                column: span.column,
            });
        }

        let (package_name, package_span) =
            Self::package_clause(root, src).ok_or(ParseError::MissingPackage)?;

        Ok(SourceFile {
            path: path.to_path_buf(),
            package_name,
            package_span,
            root: Self::convert(root, src),
        })
    }
}
