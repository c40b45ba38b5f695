//! Syntax tree consumed by the convention engine.
//!
//! The tree is produced by a language frontend (see `snowlint-go`) and keeps
//! only what the conventions look at. Every node carries a [`NodeKind`] tag;
//! nodes the engine has no handler for are kept as [`NodeKind::Other`] so
//! that their descendants are still visited.

use std::path::PathBuf;

/// Position of a node inside one source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span at the given line and column with no length.
    #[must_use]
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }
}

/// A type reference as written in a parameter or result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A plain identifier such as `error` or `int`.
    Named(String),
    /// Anything else (qualified, pointer, slice, func types, ...).
    Other,
}

impl TypeRef {
    /// Returns true if this is the bare identifier `name`.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, Self::Named(n) if n == name)
    }
}

/// One field of a parameter or result list.
///
/// `a, b int` is a single field with two names; an unnamed result like
/// `error` is a field with no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names, in order.
    pub names: Vec<String>,
    /// Declared type.
    pub ty: TypeRef,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new<I, S>(names: I, ty: TypeRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
        }
    }

    /// Returns the first declared name, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// An expression shape the rules care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier.
    Ident(String),
    /// Any other expression.
    Other,
}

impl Expr {
    /// Returns true if this is the bare identifier `name`.
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, Self::Ident(n) if n == name)
    }
}

/// An import declaration with its path already unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Import path, e.g. `github.com/acme/shop/lib/client`.
    pub path: String,
}

/// One spec of a `var` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    /// Declared names, in order.
    pub names: Vec<String>,
}

/// One spec of a `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Declared type name.
    pub name: String,
    /// Whether the underlying type is a struct literal type.
    pub is_struct: bool,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name (methods: the method name, without receiver).
    pub name: String,
    /// Parameter fields.
    pub params: Vec<Field>,
    /// Result fields; empty when the function returns nothing.
    pub results: Vec<Field>,
}

/// An `if` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfStmt {
    /// Whether the statement has an `else` branch.
    pub has_else: bool,
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    /// Returned expressions.
    pub results: Vec<Expr>,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// Called expression.
    pub callee: Expr,
    /// Number of arguments (a leading type argument counts).
    pub arg_count: usize,
}

/// Tag of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a source file.
    File,
    /// `import "path"`.
    ImportSpec(ImportSpec),
    /// `var a, b = ...`.
    VarSpec(VarSpec),
    /// `type Name ...`.
    TypeSpec(TypeSpec),
    /// Top-level function or method declaration.
    FuncDecl(FuncDecl),
    /// Function literal (closure).
    FuncLit,
    /// `{ ... }`; children are the statements.
    Block,
    /// `go f()`.
    GoStmt,
    /// `if ... { } else { }`.
    IfStmt(IfStmt),
    /// `return ...`.
    ReturnStmt(ReturnStmt),
    /// `f(...)`.
    CallExpr(CallExpr),
    /// Any node without a dedicated handler, labelled by its grammar kind.
    Other(&'static str),
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// What this node is.
    pub kind: NodeKind,
    /// Where it is.
    pub span: Span,
    /// Child nodes in source order.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node without children.
    #[must_use]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// Replaces the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns the first direct child that is a [`NodeKind::Block`].
    #[must_use]
    pub fn body(&self) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Block))
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File path, relative to the analyzed root when produced by the loader.
    pub path: PathBuf,
    /// Identifier of the package clause (`package foo` → `foo`).
    pub package_name: String,
    /// Position of the package clause.
    pub package_span: Span,
    /// Root node, of kind [`NodeKind::File`].
    pub root: SyntaxNode,
}

/// The files of one package, analyzed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Package import path, e.g. `github.com/acme/shop/lib/client`.
    pub path: String,
    /// Files belonging to the package.
    pub files: Vec<SourceFile>,
}

impl Package {
    /// Creates an empty package.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            files: Vec::new(),
        }
    }

    /// Adds a file to the package.
    #[must_use]
    pub fn with_file(mut self, file: SourceFile) -> Self {
        self.files.push(file);
        self
    }
}
