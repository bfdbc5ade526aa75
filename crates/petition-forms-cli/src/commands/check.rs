use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use petition_validation::FormsConfig;

/// Validate `values` against `form`; returns whether the form may be submitted
pub fn execute(config: &Path, form: &str, values: &[String], json: bool) -> Result<bool> {
    let config = FormsConfig::load(config)?;
    let mut bound = config.form(form)?.bind();

    for assignment in values {
        let (field, value) = parse_assignment(assignment)?;
        bound
            .set_value(field, value)
            .with_context(|| format!("Form `{}` has no field `{}`", form, field))?;
    }

    let result = bound.errors();
    tracing::debug!(form, invalid_fields = result.errors.len(), "checked form");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid());
    }

    println!("{} {}", "Form:".bold(), form.cyan());
    for name in bound.field_names() {
        match result.get_error(name) {
            Some(message) => println!("  {} {}: {}", "✗".red(), name, message),
            None => println!("  {} {}", "✓".green(), name),
        }
    }

    if result.is_valid() {
        println!("{}", "Ready to submit".green().bold());
    } else {
        println!("{}", "Submission blocked".red().bold());
    }
    Ok(result.is_valid())
}

/// Split `FIELD=VALUE` at the first `=`; the value may itself contain `=`
fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field, value)),
        _ => bail!("Expected FIELD=VALUE, got `{}`", assignment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("title=Save the bees").unwrap(), ("title", "Save the bees"));
        assert_eq!(parse_assignment("cost=").unwrap(), ("cost", ""));
        assert_eq!(parse_assignment("q=a=b").unwrap(), ("q", "a=b"));
        assert!(parse_assignment("title").is_err());
        assert!(parse_assignment("=value").is_err());
    }
}
