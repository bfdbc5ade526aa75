use anyhow::{Context, Result};
use colored::Colorize;
use petition_validation::{NumberRules, Rules, StringRules, Violation};

use crate::RuleKind;

/// Evaluate one value against inline JSON rules; returns whether it is valid
pub fn execute(kind: RuleKind, rules: &str, value: &str) -> Result<bool> {
    match evaluate(kind, rules, value)? {
        Some(violation) => {
            println!("{} {}", "✗".red(), violation);
            Ok(false)
        }
        None => {
            println!("{} {}", "✓".green(), "valid");
            Ok(true)
        }
    }
}

fn evaluate(kind: RuleKind, rules: &str, value: &str) -> Result<Option<Violation>> {
    let violation = match kind {
        RuleKind::Text => {
            let rules: StringRules =
                serde_json::from_str(rules).context("Failed to parse text rules")?;
            rules.evaluate(value)
        }
        RuleKind::Number => {
            let rules: NumberRules =
                serde_json::from_str(rules).context("Failed to parse number rules")?;
            rules.evaluate(value)
        }
    };
    Ok(violation)
}
