//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# snowlint configuration

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]

# Module path; read from go.mod when omitted
# module = "shop"

# Respect .gitignore files
respect_gitignore = true

# Analyze _test.go files
include_tests = true

# Rule configurations, keyed by name or code.
# Each rule can be enabled/disabled and have its severity overridden.

[rules.no-raw-goroutine]
enabled = true
# severity = "warning"  # Override default severity

[rules.no-else]
enabled = true

# [rules.operation-pair]
# enabled = false
"#;

/// Name of the file written by `init`.
pub const CONFIG_FILE: &str = "snowlint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: snowlint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
