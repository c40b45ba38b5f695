//! Layering rules between package groups.
//!
//! # Detected Patterns
//!
//! - an import of a package in the same group at the same depth
//!   (`shop/cmd/api` importing `shop/cmd/worker`)
//! - an import crossing the dependency order:
//!
//! | file group | must not import |
//! |---|---|
//! | `lib` | `internal`, `cmd` |
//! | `internal` | `cmd` |
//! | `model` | `cmd`, `internal`, `lib` |
//! | `gen` | `cmd`, `internal`, `lib` |
//!
//! Imports at a different depth inside the same group are allowed.

use snowlint_core::syntax::ImportSpec;
use snowlint_core::{classify, FileContext, Group, PackagePath, Reporter, RuleId, Span};

/// Import groups each file group must not depend on.
const FORBIDDEN_IMPORTS: &[(Group, &[Group])] = &[
    (Group::Lib, &[Group::Internal, Group::Cmd]),
    (Group::Internal, &[Group::Cmd]),
    (Group::Model, &[Group::Cmd, Group::Internal, Group::Lib]),
    (Group::Gen, &[Group::Cmd, Group::Internal, Group::Lib]),
];

/// A layering problem between a file's package and one of its imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerViolation {
    /// Both packages sit in the same group at the same depth.
    SameGroupSameDepth,
    /// The import belongs to a group the file's group must not depend on.
    Forbidden(Group),
}

impl LayerViolation {
    /// Rule reporting this violation.
    #[must_use]
    pub fn rule(self) -> RuleId {
        match self {
            Self::SameGroupSameDepth => RuleId::LayerSameDepth,
            Self::Forbidden(_) => RuleId::LayerDependency,
        }
    }

    /// Diagnostic message.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::SameGroupSameDepth => "must not import from the same group, same depth".into(),
            Self::Forbidden(group) => format!("must not import from {} package", group.label()),
        }
    }
}

/// Returns the groups `group` must not import from.
#[must_use]
pub fn forbidden_imports(group: Group) -> &'static [Group] {
    FORBIDDEN_IMPORTS
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, forbidden)| *forbidden)
        .unwrap_or(&[])
}

/// Checks one (file package, import) pair.
///
/// Groups compare as plain strings: a one-segment package importing a
/// one-segment package (`tool` importing `fmt`) is the same group, same depth.
#[must_use]
pub fn check_import(file: &PackagePath<'_>, import: &PackagePath<'_>) -> Vec<LayerViolation> {
    let mut found = Vec::new();

    if file.group == import.group && file.depth() == import.depth() {
        found.push(LayerViolation::SameGroupSameDepth);
    }

    let target = import.kind();
    if forbidden_imports(file.kind()).contains(&target) {
        found.push(LayerViolation::Forbidden(target));
    }

    found
}

pub(crate) fn check(
    ctx: &FileContext<'_>,
    import: &ImportSpec,
    span: Span,
    reporter: &mut Reporter<'_>,
) {
    let target = classify(&import.path);
    for violation in check_import(&ctx.package, &target) {
        reporter.report(violation.rule(), ctx.path, span, violation.message());
    }
}
