//! Context types for rule execution.

use std::path::Path;

use crate::package_path::{classify, PackagePath};
use crate::syntax::{Package, SourceFile};

/// Context provided to rules while one file of a package is traversed.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file, as reported in violations.
    pub path: &'a Path,
    /// Classified package path.
    pub package: PackagePath<'a>,
    /// Package clause identifier of the file.
    pub package_name: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates the context for `file` inside `package`.
    #[must_use]
    pub fn new(package: &'a Package, file: &'a SourceFile) -> Self {
        Self {
            path: &file.path,
            package: classify(&package.path),
            package_name: &file.package_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, Span, SyntaxNode};
    use std::path::PathBuf;

    fn file(path: &str) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            package_name: "client".into(),
            package_span: Span::at(1, 1),
            root: SyntaxNode::new(NodeKind::File, Span::at(1, 1)),
        }
    }

    #[test]
    fn context_classifies_package_path() {
        let package = Package::new("shop/lib/client").with_file(file("lib/client/client.go"));
        let ctx = FileContext::new(&package, &package.files[0]);
        assert_eq!(ctx.package.group, "lib");
        assert_eq!(ctx.package.remainder, vec!["client"]);
        assert_eq!(ctx.package_name, "client");
        assert_eq!(ctx.path, Path::new("lib/client/client.go"));
    }
}
