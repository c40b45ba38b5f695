//! Configuration types for snowlint.
//!
//! Finding the configuration file is the job of the caller (see
//! `snowlint-cli`); this module only reads and interprets it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::rule::RuleId;
use crate::types::Severity;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Loader configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    fn rule_config(&self, rule: RuleId) -> Option<&RuleConfig> {
        self.rules
            .get(rule.name())
            .or_else(|| self.rules.get(rule.code()))
    }

    /// Checks if a rule is enabled. Rules are enabled unless configured off.
    #[must_use]
    pub fn is_rule_enabled(&self, rule: RuleId) -> bool {
        self.rule_config(rule)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule: RuleId) -> Option<Severity> {
        self.rule_config(rule).and_then(|c| c.severity)
    }

    /// Effective severity for a rule: the override, else its default.
    #[must_use]
    pub fn severity_for(&self, rule: RuleId) -> Severity {
        self.rule_severity(rule)
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Disables every rule not listed in `only`.
    pub fn restrict_to(&mut self, only: &[RuleId]) {
        for rule in RuleId::ALL {
            if !only.contains(&rule) {
                self.rules.entry(rule.name().to_string()).or_default().enabled = Some(false);
            }
        }
    }
}

/// Loader-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Module path override; by default it is read from `go.mod`.
    #[serde(default)]
    pub module: Option<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Whether `_test.go` files are analyzed.
    #[serde(default = "default_true")]
    pub include_tests: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["**/vendor/**".to_string(), "**/testdata/**".to_string()],
            module: None,
            respect_gitignore: true,
            include_tests: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.analyzer.include_tests);
        assert!(config.rules.is_empty());
        assert!(RuleId::ALL.iter().all(|r| config.is_rule_enabled(*r)));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/generated/**"]
module = "github.com/acme/shop"

[rules.no-else]
enabled = false

[rules.SN014]
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert_eq!(config.analyzer.module.as_deref(), Some("github.com/acme/shop"));
        assert!(!config.is_rule_enabled(RuleId::NoElse));
        assert!(config.is_rule_enabled(RuleId::OperationPair));
        assert_eq!(config.severity_for(RuleId::OperationPair), Severity::Error);
        assert_eq!(config.severity_for(RuleId::NoElse), Severity::Warning);
    }

    #[test]
    fn restrict_to_disables_the_rest() {
        let mut config = Config::new();
        config.restrict_to(&[RuleId::MakeArity]);
        assert!(config.is_rule_enabled(RuleId::MakeArity));
        assert!(!config.is_rule_enabled(RuleId::NoRawGoroutine));
        assert!(!config.is_rule_enabled(RuleId::ErrorContract));
    }

    #[test]
    fn parse_rejects_unknown_severity() {
        let err = Config::parse("[rules.no-else]\nseverity = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/snowlint.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/snowlint.toml"));
    }
}
