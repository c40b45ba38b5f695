//! List rules command implementation.

use snowlint_core::RuleId;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<22} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(96));

    for rule in RuleId::ALL {
        println!(
            "{:<8} {:<22} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  snowlint check --rules no-raw-goroutine,layer-dependency");
    println!("  snowlint check --rules SN001,SN012");
}
