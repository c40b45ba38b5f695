//! Diagnostic sinks.
//!
//! The engine never buffers its output: each violation is handed to a
//! caller-supplied [`DiagnosticSink`] as soon as it is known. [`Reporter`]
//! sits in front of the sink and applies the rule configuration.

use std::path::Path;

use tracing::trace;

use crate::config::Config;
use crate::rule::RuleId;
use crate::syntax::Span;
use crate::types::{LintResult, Location, Suggestion, Violation};

/// Receives violations in emission order.
///
/// Sinks own presentation: the engine does not format, sort, deduplicate or
/// rate-limit what it reports.
pub trait DiagnosticSink {
    /// Accepts one violation.
    fn report(&mut self, violation: Violation);
}

impl DiagnosticSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl DiagnosticSink for LintResult {
    fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, violation: Violation) {
        (**self).report(violation);
    }
}

/// Builds violations for a rule and forwards them to a sink.
///
/// Disabled rules are dropped here and severity overrides are applied, so
/// rule code only decides *whether* something is wrong.
pub struct Reporter<'a> {
    sink: &'a mut dyn DiagnosticSink,
    config: &'a Config,
    reported: usize,
}

impl<'a> Reporter<'a> {
    /// Wraps `sink` with the given configuration.
    pub fn new(sink: &'a mut dyn DiagnosticSink, config: &'a Config) -> Self {
        Self {
            sink,
            config,
            reported: 0,
        }
    }

    /// Reports a violation of `rule` at `span` in `file`.
    pub fn report(&mut self, rule: RuleId, file: &Path, span: Span, message: impl Into<String>) {
        self.emit(rule, Location::from_span(file.to_path_buf(), span), message.into(), None);
    }

    /// Reports a violation of `rule` with a help line.
    pub fn report_with_help(
        &mut self,
        rule: RuleId,
        file: &Path,
        span: Span,
        message: impl Into<String>,
        help: impl Into<String>,
    ) {
        self.emit(
            rule,
            Location::from_span(file.to_path_buf(), span),
            message.into(),
            Some(Suggestion::new(help)),
        );
    }

    /// Reports a violation of `rule` at an already built location.
    pub fn report_at(&mut self, rule: RuleId, location: Location, message: impl Into<String>) {
        self.emit(rule, location, message.into(), None);
    }

    /// Number of violations forwarded so far.
    #[must_use]
    pub fn reported(&self) -> usize {
        self.reported
    }

    fn emit(
        &mut self,
        rule: RuleId,
        location: Location,
        message: String,
        suggestion: Option<Suggestion>,
    ) {
        if !self.config.is_rule_enabled(rule) {
            trace!("Dropping {} from disabled rule {}", message, rule);
            return;
        }

        let mut violation = Violation::new(
            rule.code(),
            rule.name(),
            self.config.severity_for(rule),
            location,
            message,
        );
        violation.suggestion = suggestion;

        self.reported += 1;
        self.sink.report(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::types::Severity;

    #[test]
    fn reporter_builds_violation_from_rule() {
        let config = Config::default();
        let mut sink: Vec<Violation> = Vec::new();
        let mut reporter = Reporter::new(&mut sink, &config);

        reporter.report(
            RuleId::MakeArity,
            Path::new("a.go"),
            Span::at(7, 9),
            "make function should be called with 2 arguments",
        );
        assert_eq!(reporter.reported(), 1);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, "SN010");
        assert_eq!(sink[0].rule, "make-arity");
        assert_eq!(sink[0].severity, Severity::Warning);
        assert_eq!(sink[0].location.line, 7);
        assert_eq!(sink[0].location.column, 9);
    }

    #[test]
    fn reporter_drops_disabled_rules() {
        let mut config = Config::default();
        config.rules.insert(
            "SN010".into(),
            RuleConfig {
                enabled: Some(false),
                severity: None,
            },
        );
        let mut sink = LintResult::new();
        let mut reporter = Reporter::new(&mut sink, &config);

        reporter.report(RuleId::MakeArity, Path::new("a.go"), Span::at(1, 1), "x");
        assert_eq!(reporter.reported(), 0);
        assert!(sink.violations.is_empty());
    }

    #[test]
    fn reporter_applies_severity_override_and_help() {
        let mut config = Config::default();
        config.rules.insert(
            "banned-import".into(),
            RuleConfig {
                enabled: None,
                severity: Some(Severity::Info),
            },
        );
        let mut sink: Vec<Violation> = Vec::new();
        let mut reporter = Reporter::new(&mut sink, &config);
        reporter.report_with_help(
            RuleId::BannedImport,
            Path::new("a.go"),
            Span::at(3, 2),
            "should not use io/ioutil, use os or package io instead",
            "use os or package io instead",
        );

        assert_eq!(sink[0].severity, Severity::Info);
        assert_eq!(
            sink[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("use os or package io instead")
        );
    }
}
