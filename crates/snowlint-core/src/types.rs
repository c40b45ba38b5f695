//! Core types for convention violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::syntax::Span;

/// Severity level for convention violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
///
/// Only used as a reporting handle. Ordering is by file, then line, then
/// column, which is what output sorting needs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the analyzed root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a location from a syntax span inside `file`.
    #[must_use]
    pub fn from_span(file: PathBuf, span: Span) -> Self {
        Self {
            file,
            line: span.line,
            column: span.column,
            offset: span.offset,
            length: span.length,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }
}

/// A suggested fix for a violation, shown as help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A convention violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SN001").
    pub code: String,
    /// Rule name (e.g., "no-raw-goroutine").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running convention analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in emission order unless sorted.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of packages checked.
    #[serde(default)]
    pub packages_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns violations produced by the given rule (name or code).
    #[must_use]
    pub fn by_rule(&self, rule: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.rule == rule || v.code == rule)
            .collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        let infos = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Sorts violations by file, then line, then column.
    ///
    /// The sort is stable, so violations at the same location keep their
    /// emission order.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
        self.packages_checked += other.packages_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "SN001",
            "no-raw-goroutine",
            severity,
            Location::new(PathBuf::from("lib/client/client.go"), 42, 2),
            "should not use raw goroutine, use goroutine pool instead",
        )
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Error);
        assert_eq!(
            v.to_string(),
            "lib/client/client.go:42:2: error [SN001] should not use raw goroutine, use goroutine pool instead"
        );
    }

    #[test]
    fn location_from_span_copies_fields() {
        let span = Span {
            line: 3,
            column: 5,
            offset: 40,
            length: 7,
        };
        let loc = Location::from_span(PathBuf::from("a.go"), span);
        assert_eq!((loc.line, loc.column, loc.offset, loc.length), (3, 5, 40, 7));
    }

    #[test]
    fn warnings_alone_are_not_errors() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_errors());
        result.violations.push(make_violation(Severity::Error));
        assert!(result.has_errors());
    }

    #[test]
    fn diagnostic_carries_help_and_span() {
        let mut v = make_violation(Severity::Error);
        v.location.offset = 40;
        v.location.length = 7;
        v.suggestion = Some(Suggestion::new("use a pool"));

        let diagnostic = ViolationDiagnostic::from(&v);
        assert_eq!(
            diagnostic.to_string(),
            "[SN001] should not use raw goroutine, use goroutine pool instead"
        );
        assert_eq!(diagnostic.help.as_deref(), Some("use a pool"));
        assert_eq!(diagnostic.span, SourceSpan::from((40, 7)));
    }

    #[test]
    fn sort_keeps_emission_order_for_equal_locations() {
        let mut result = LintResult::new();
        let mut later = make_violation(Severity::Error);
        later.location.line = 50;
        let mut first = make_violation(Severity::Error);
        first.message = "first".into();
        let mut second = make_violation(Severity::Error);
        second.message = "second".into();
        result.violations = vec![later, first, second];

        result.sort();

        let messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages[0], "first");
        assert_eq!(messages[1], "second");
        assert_eq!(result.violations[2].location.line, 50);
    }

    #[test]
    fn by_rule_matches_name_or_code() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        assert_eq!(result.by_rule("SN001").len(), 1);
        assert_eq!(result.by_rule("no-raw-goroutine").len(), 1);
        assert!(result.by_rule("no-else").is_empty());
    }

    #[test]
    fn extend_sums_counters() {
        let mut a = LintResult {
            violations: vec![make_violation(Severity::Error)],
            files_checked: 2,
            packages_checked: 1,
        };
        let b = LintResult {
            violations: vec![make_violation(Severity::Info)],
            files_checked: 3,
            packages_checked: 1,
        };
        a.extend(b);
        assert_eq!(a.violations.len(), 2);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.packages_checked, 2);
        assert_eq!(a.count_by_severity(), (1, 0, 1));
    }
}
