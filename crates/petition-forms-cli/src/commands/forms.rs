use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use petition_validation::{FieldRules, FormsConfig};

/// Print every configured form and its field rules
pub fn execute(config: &Path, as_toml: bool) -> Result<()> {
    let config = FormsConfig::load(config)?;

    if as_toml {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    for (name, schema) in &config.forms {
        println!("{}", name.cyan().bold());
        for (field, rules) in &schema.fields {
            println!("  {:<16} {}", field, describe(rules));
        }
        println!();
    }
    Ok(())
}

/// One-line summary, e.g. `text required maxLength=256 email`
fn describe(rules: &FieldRules) -> String {
    let mut parts = vec![rules.kind().to_string()];
    match rules {
        FieldRules::Text(text) => {
            if text.required {
                parts.push("required".to_string());
            }
            if let Some(min) = text.min_length {
                parts.push(format!("minLength={}", min));
            }
            if let Some(max) = text.max_length {
                parts.push(format!("maxLength={}", max));
            }
            if text.email {
                parts.push("email".to_string());
            }
        }
        FieldRules::Number(number) => {
            if number.required {
                parts.push("required".to_string());
            }
            if number.integer {
                parts.push("integer".to_string());
            }
            if let Some(min) = number.min_value {
                parts.push(format!("minValue={}", min));
            }
            if let Some(max) = number.max_value {
                parts.push(format!("maxValue={}", max));
            }
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use petition_validation::{NumberRules, StringRules};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe() {
        let email = FieldRules::from(StringRules::new().required().max_length(256).email());
        assert_eq!(describe(&email), "text required maxLength=256 email");

        let cost = FieldRules::from(NumberRules::new().required().integer().min_value(0.0));
        assert_eq!(describe(&cost), "number required integer minValue=0");
    }
}
