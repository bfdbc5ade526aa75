//! String validation functions
//!
//! Precedence is fixed: `required`, then `maxLength`, then `minLength`, then
//! `email`. Only the first violation is reported.

use crate::email::is_valid_email;
use crate::error::Violation;
use crate::rules::StringRules;

/// Evaluate `value` against `rules`, returning the first violation
pub fn evaluate(value: &str, rules: &StringRules) -> Option<Violation> {
    check(value, rules).err()
}

/// Same as [`evaluate`], shaped for `?`
pub fn check(value: &str, rules: &StringRules) -> Result<(), Violation> {
    if rules.required {
        validate_required(value)?;
    }
    if let Some(max) = rules.max_length {
        validate_max_length(value, max)?;
    }
    if let Some(min) = rules.min_length {
        validate_min_length(value, min)?;
    }
    if rules.email && !is_valid_email(value) {
        return Err(Violation::InvalidEmail);
    }
    Ok(())
}

/// Whitespace-only counts as empty
pub fn validate_required(s: &str) -> Result<(), Violation> {
    if s.trim().is_empty() {
        Err(Violation::Required)
    } else {
        Ok(())
    }
}

/// Validates string length, counted in characters rather than bytes
pub fn validate_min_length(s: &str, min: usize) -> Result<(), Violation> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(Violation::TooShort(min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), Violation> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(Violation::TooLong(max))
    }
}
