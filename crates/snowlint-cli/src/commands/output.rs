//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use snowlint_core::{LintResult, Severity, ViolationDiagnostic};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; violation paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s) across {} package(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked, result.packages_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

/// One line per violation: `file:line:col: severity [code] message`.
fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

/// Renders each violation against its source with miette.
///
/// Files that can no longer be read are rendered without a snippet.
fn print_pretty(result: &LintResult, root: &Path) {
    let mut sources: HashMap<PathBuf, Option<String>> = HashMap::new();

    for violation in &result.violations {
        let file = &violation.location.file;
        let source = sources
            .entry(file.clone())
            .or_insert_with(|| std::fs::read_to_string(root.join(file)).ok());

        let report = Report::new(ViolationDiagnostic::from(violation));
        let report = match source {
            Some(code) => report.with_source_code(NamedSource::new(
                file.display().to_string(),
                code.clone(),
            )),
            None => report,
        };
        println!("{report:?}");
    }

    print_summary(result);
}
