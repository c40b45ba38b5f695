//! Package path classification.
//!
//! A package path is split on `/` into segments. The *group* is the
//! architectural layer the package belongs to and the *remainder* is what
//! follows it, used to compare depths.
//!
//! ```
//! use snowlint_core::package_path::classify;
//!
//! let p = classify("shop/lib/client");
//! assert_eq!(p.group, "lib");
//! assert_eq!(p.remainder, vec!["client"]);
//! ```

/// Group segment for shared libraries.
pub const LIBRARY_GROUP: &str = "lib";
/// Group segment for application internals.
pub const INTERNAL_GROUP: &str = "internal";
/// Group segment for commands (binaries).
pub const COMMAND_GROUP: &str = "cmd";
/// Group segment for data models.
pub const MODEL_GROUP: &str = "model";
/// Group segment for generated code.
pub const GEN_GROUP: &str = "gen";

/// The architectural layer of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// `lib`
    Lib,
    /// `internal`
    Internal,
    /// `cmd`
    Cmd,
    /// `model`
    Model,
    /// `gen`
    Gen,
    /// Any other segment, including the empty one.
    Other,
}

impl Group {
    /// Maps a group segment to a [`Group`].
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            LIBRARY_GROUP => Self::Lib,
            INTERNAL_GROUP => Self::Internal,
            COMMAND_GROUP => Self::Cmd,
            MODEL_GROUP => Self::Model,
            GEN_GROUP => Self::Gen,
            _ => Self::Other,
        }
    }

    /// Human-readable label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lib => "library",
            Self::Internal => "internal",
            Self::Cmd => "command",
            Self::Model => "model",
            Self::Gen => "generated",
            Self::Other => "unknown",
        }
    }
}

/// A classified package path borrowing from the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePath<'a> {
    /// Group segment; empty for paths with fewer than two segments.
    pub group: &'a str,
    /// Segments after the group.
    pub remainder: Vec<&'a str>,
}

impl<'a> PackagePath<'a> {
    /// The group as a [`Group`].
    #[must_use]
    pub fn kind(&self) -> Group {
        Group::from_segment(self.group)
    }

    /// Depth below the group.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.remainder.len()
    }

    /// Last segment of the remainder, i.e. the package's own name.
    #[must_use]
    pub fn last_segment(&self) -> Option<&'a str> {
        self.remainder.last().copied()
    }
}

/// Splits `path` into its group and remainder.
///
/// - fewer than 2 segments: no group, the remainder is every segment;
/// - exactly 2 segments: the first one is the group;
/// - 3 or more: the second one is the group and the root is ignored.
#[must_use]
pub fn classify(path: &str) -> PackagePath<'_> {
    let parts: Vec<&str> = path.split('/').collect();
    match parts.len() {
        0 | 1 => PackagePath {
            group: "",
            remainder: parts,
        },
        2 => PackagePath {
            group: parts[0],
            remainder: parts[1..].to_vec(),
        },
        _ => PackagePath {
            group: parts[1],
            remainder: parts[2..].to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_has_no_group() {
        let p = classify("main");
        assert_eq!(p.group, "");
        assert_eq!(p.remainder, vec!["main"]);
        assert_eq!(p.kind(), Group::Other);
    }

    #[test]
    fn empty_path_is_one_empty_segment() {
        let p = classify("");
        assert_eq!(p.group, "");
        assert_eq!(p.remainder, vec![""]);
    }

    #[test]
    fn two_segments_use_first_as_group() {
        let p = classify("lib/client");
        assert_eq!(p.group, "lib");
        assert_eq!(p.remainder, vec!["client"]);
        assert_eq!(p.depth(), 1);
    }

    #[test]
    fn three_or_more_segments_skip_the_root() {
        let p = classify("shop/internal/order/store");
        assert_eq!(p.group, "internal");
        assert_eq!(p.remainder, vec!["order", "store"]);
        assert_eq!(p.kind(), Group::Internal);
        assert_eq!(p.last_segment(), Some("store"));
    }

    #[test]
    fn exactly_three_segments() {
        let p = classify("a/b/c");
        assert_eq!(p.group, "b");
        assert_eq!(p.remainder, vec!["c"]);
    }

    #[test]
    fn root_namespace_depth_is_ignored() {
        // The root is dropped regardless of how it looks.
        let p = classify("github.com/acme/lib/client");
        assert_eq!(p.group, "acme");
        assert_eq!(p.remainder, vec!["lib", "client"]);
    }

    #[test]
    fn group_from_segment_is_closed() {
        assert_eq!(Group::from_segment("lib"), Group::Lib);
        assert_eq!(Group::from_segment("cmd"), Group::Cmd);
        assert_eq!(Group::from_segment("model"), Group::Model);
        assert_eq!(Group::from_segment("gen"), Group::Gen);
        assert_eq!(Group::from_segment("pkg"), Group::Other);
        assert_eq!(Group::Cmd.label(), "command");
        assert_eq!(Group::Lib.label(), "library");
    }
}
