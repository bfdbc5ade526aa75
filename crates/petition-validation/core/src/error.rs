//! Validation violations and structural form errors

use thiserror::Error;

/// A rule the current value does not satisfy
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("This field is required")]
    Required,

    #[error("This field cannot exceed {0} characters")]
    TooLong(usize),

    #[error("This field must be at least {0} characters")]
    TooShort(usize),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("This field must be numeric")]
    NotNumeric,

    #[error("This field must be a whole number")]
    NotInteger,

    #[error("This field cannot exceed {0}")]
    AboveMax(f64),

    #[error("This field must be at least {0}")]
    BelowMin(f64),
}

/// Failures in how a form is used, as opposed to what the user typed
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form `{0}`")]
    UnknownForm(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("invalid rules: {0}")]
    InvalidRules(String),
}
