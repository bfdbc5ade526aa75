//! Numeric validation functions
//!
//! Values arrive as raw text from an input box and are parsed here. Precedence:
//! `required`, numeric, `integer`, `maxValue`, `minValue`.

use crate::error::Violation;
use crate::rules::NumberRules;

/// Evaluate `value` against `rules`, returning the first violation
pub fn evaluate(value: &str, rules: &NumberRules) -> Option<Violation> {
    check(value, rules).err()
}

/// Same as [`evaluate`], shaped for `?`
pub fn check(value: &str, rules: &NumberRules) -> Result<(), Violation> {
    let trimmed = value.trim();
    if rules.required && trimmed.is_empty() {
        return Err(Violation::Required);
    }

    // Blank is not a number, required or not
    let number = parse_number(trimmed).ok_or(Violation::NotNumeric)?;
    if rules.integer && number.fract() != 0.0 {
        return Err(Violation::NotInteger);
    }
    if let Some(max) = rules.max_value {
        validate_max(number, max)?;
    }
    if let Some(min) = rules.min_value {
        validate_min(number, min)?;
    }
    Ok(())
}

/// Parses a finite number, ignoring surrounding whitespace
pub fn parse_number(value: &str) -> Option<f64> {
    let number: f64 = value.trim().parse().ok()?;
    number.is_finite().then_some(number)
}

/// Validates minimum value
pub fn validate_min(value: f64, min: f64) -> Result<(), Violation> {
    if value >= min {
        Ok(())
    } else {
        Err(Violation::BelowMin(min))
    }
}

/// Validates maximum value
pub fn validate_max(value: f64, max: f64) -> Result<(), Violation> {
    if value <= max {
        Ok(())
    } else {
        Err(Violation::AboveMax(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_validation() {
        assert!(validate_min(10.0, 5.0).is_ok());
        assert!(validate_min(5.0, 5.0).is_ok());
        assert!(validate_min(3.0, 5.0).is_err());

        assert!(validate_min(18.5, 18.0).is_ok());
        assert!(validate_min(17.9, 18.0).is_err());
    }

    #[test]
    fn test_max_validation() {
        assert!(validate_max(5.0, 10.0).is_ok());
        assert!(validate_max(10.0, 10.0).is_ok());
        assert!(validate_max(15.0, 10.0).is_err());

        assert!(validate_max(99.9, 100.0).is_ok());
        assert!(validate_max(100.1, 100.0).is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -1.5 "), Some(-1.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_zero_bounds_are_enforced() {
        let rules = NumberRules::new().max_value(0.0);
        assert_eq!(evaluate("0", &rules), None);
        assert_eq!(evaluate("1", &rules), Some(Violation::AboveMax(0.0)));

        let rules = NumberRules::new().min_value(0.0);
        assert_eq!(evaluate("-0.01", &rules), Some(Violation::BelowMin(0.0)));
    }

    #[test]
    fn test_integer_rule() {
        let rules = NumberRules::new().integer();
        assert_eq!(evaluate("15", &rules), None);
        assert_eq!(evaluate("15.0", &rules), None);
        assert_eq!(evaluate("1.5", &rules), Some(Violation::NotInteger));
    }

    #[test]
    fn test_blank_optional_number_is_not_numeric() {
        let rules = NumberRules::new().min_value(1.0);
        assert_eq!(evaluate("", &rules), Some(Violation::NotNumeric));
        assert_eq!(evaluate("   ", &rules), Some(Violation::NotNumeric));

        let rules = NumberRules::new().integer();
        assert_eq!(evaluate("", &rules), Some(Violation::NotNumeric));
    }

    #[test]
    fn test_precedence() {
        let rules = NumberRules::new().required().integer().min_value(5.0).max_value(1.0);
        assert_eq!(evaluate(" ", &rules), Some(Violation::Required));
        assert_eq!(evaluate("x", &rules), Some(Violation::NotNumeric));
        assert_eq!(evaluate("2.5", &rules), Some(Violation::NotInteger));
        assert_eq!(evaluate("3", &rules), Some(Violation::AboveMax(1.0)));
    }
}
