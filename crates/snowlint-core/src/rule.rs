//! Rule identities and metadata.
//!
//! The rule set is closed: every convention the engine knows about has a
//! [`RuleId`] with a stable code, a kebab-case name, a short description and
//! a default severity.

use crate::types::Severity;

/// Identifies one convention rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    /// Raw `go` statements bypassing a goroutine pool.
    NoRawGoroutine,
    /// Exported package-level variables.
    NoExportedGlobal,
    /// Generic package names such as `util`.
    BannedPackageName,
    /// Imports of legacy or duplicate packages.
    BannedImport,
    /// `ctx` parameter not in first position.
    ContextFirst,
    /// `New…` constructor without a `ctx` parameter.
    MissingContext,
    /// `error` result not in last position.
    ErrorLast,
    /// `if` with an `else` branch at the top of a function body.
    NoElse,
    /// `return err` without wrapping.
    NoBareErrReturn,
    /// `make` called with fewer than two arguments.
    MakeArity,
    /// Import of a sibling package in the same group and depth.
    LayerSameDepth,
    /// Import crossing a forbidden group boundary.
    LayerDependency,
    /// Error struct and `Is…Error` checker pairing.
    ErrorContract,
    /// Request/Reply, Send/Receive, Publish/Subscribe pairing.
    OperationPair,
}

impl RuleId {
    /// Every rule, in code order.
    pub const ALL: [RuleId; 14] = [
        Self::NoRawGoroutine,
        Self::NoExportedGlobal,
        Self::BannedPackageName,
        Self::BannedImport,
        Self::ContextFirst,
        Self::MissingContext,
        Self::ErrorLast,
        Self::NoElse,
        Self::NoBareErrReturn,
        Self::MakeArity,
        Self::LayerSameDepth,
        Self::LayerDependency,
        Self::ErrorContract,
        Self::OperationPair,
    ];

    /// Returns the rule code (e.g., "SN001").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NoRawGoroutine => "SN001",
            Self::NoExportedGlobal => "SN002",
            Self::BannedPackageName => "SN003",
            Self::BannedImport => "SN004",
            Self::ContextFirst => "SN005",
            Self::MissingContext => "SN006",
            Self::ErrorLast => "SN007",
            Self::NoElse => "SN008",
            Self::NoBareErrReturn => "SN009",
            Self::MakeArity => "SN010",
            Self::LayerSameDepth => "SN011",
            Self::LayerDependency => "SN012",
            Self::ErrorContract => "SN013",
            Self::OperationPair => "SN014",
        }
    }

    /// Returns the kebab-case name of this rule.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NoRawGoroutine => "no-raw-goroutine",
            Self::NoExportedGlobal => "no-exported-global",
            Self::BannedPackageName => "banned-package-name",
            Self::BannedImport => "banned-import",
            Self::ContextFirst => "context-first",
            Self::MissingContext => "missing-context",
            Self::ErrorLast => "error-last",
            Self::NoElse => "no-else",
            Self::NoBareErrReturn => "no-bare-err-return",
            Self::MakeArity => "make-arity",
            Self::LayerSameDepth => "layer-same-depth",
            Self::LayerDependency => "layer-dependency",
            Self::ErrorContract => "error-contract",
            Self::OperationPair => "operation-pair",
        }
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NoRawGoroutine => "Forbids raw goroutines; use a goroutine pool",
            Self::NoExportedGlobal => "Forbids exported package-level variables",
            Self::BannedPackageName => "Forbids generic package names such as util",
            Self::BannedImport => "Forbids legacy or duplicate standard packages",
            Self::ContextFirst => "Requires ctx to be the first parameter",
            Self::MissingContext => "Requires New* constructors to take ctx",
            Self::ErrorLast => "Requires error to be the last result",
            Self::NoElse => "Forbids else branches at the top of function bodies",
            Self::NoBareErrReturn => "Forbids returning err without wrapping",
            Self::MakeArity => "Requires make to be called with a size argument",
            Self::LayerSameDepth => "Forbids imports between siblings of one group and depth",
            Self::LayerDependency => "Enforces the lib/internal/cmd/model/gen dependency order",
            Self::ErrorContract => "Pairs every *Error struct with an Is*Error function",
            Self::OperationPair => "Pairs Request/Reply, Send/Receive and Publish/Subscribe",
        }
    }

    /// Returns the default severity for violations from this rule.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        match self {
            Self::NoExportedGlobal
            | Self::BannedPackageName
            | Self::MissingContext
            | Self::NoElse
            | Self::NoBareErrReturn
            | Self::MakeArity
            | Self::OperationPair => Severity::Warning,
            Self::NoRawGoroutine
            | Self::BannedImport
            | Self::ContextFirst
            | Self::ErrorLast
            | Self::LayerSameDepth
            | Self::LayerDependency
            | Self::ErrorContract => Severity::Error,
        }
    }

    /// Looks a rule up by name or code.
    #[must_use]
    pub fn parse(name_or_code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == name_or_code || r.code().eq_ignore_ascii_case(name_or_code))
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
