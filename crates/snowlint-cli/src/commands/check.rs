//! Check command implementation.

use anyhow::{Context, Result};
use rayon::prelude::*;
use snowlint_core::{Config, LintResult, RuleId};
use snowlint_go::{load_packages, LoadOptions};
use snowlint_rules::Engine;
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Directory to analyze.
    pub path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes to run.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Module path override.
    pub module: Option<String>,
    /// Fail on unparseable files.
    pub fail_on_parse_error: bool,
}

/// Runs the check command.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<()> {
    let result = analyze(args, source)?;

    super::output::print(&result, args.format, &args.path)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the configuration and packages, then checks every package.
///
/// Packages are checked in parallel; each check has its own registries, and
/// results are merged in package order.
pub fn analyze(args: &CheckArgs, source: &ConfigSource) -> Result<LintResult> {
    let mut config = load_config(source)?;

    if let Some(filter) = &args.rules {
        config.restrict_to(&parse_rule_filter(filter));
    }
    config.analyzer.exclude.extend(args.exclude.iter().cloned());
    if let Some(module) = &args.module {
        config.analyzer.module = Some(module.clone());
    }

    let mut options = LoadOptions::from(&config.analyzer);
    options.fail_on_parse_error = args.fail_on_parse_error;

    let loaded = load_packages(&args.path, &options)
        .with_context(|| format!("Failed to load packages from {}", args.path.display()))?;

    tracing::info!(
        "Analyzing {} packages of {} ({} files)",
        loaded.packages.len(),
        loaded.module.path,
        loaded.file_count()
    );

    let engine = Engine::new(config);
    let results: Vec<LintResult> = loaded
        .packages
        .par_iter()
        .map(|package| engine.check(package))
        .collect();

    let mut result = LintResult::new();
    for package_result in results {
        result.extend(package_result);
    }
    result.sort();

    Ok(result)
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Resolves comma-separated rule names or codes, warning about unknown ones.
fn parse_rule_filter(filter: &str) -> Vec<RuleId> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let rule = RuleId::parse(name);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}
