//! Declarative rule sets for a single field
//!
//! Rule sets serialize with camelCase keys (`maxLength`, `minValue`) so the
//! same shape is used by `forms.toml`, the CLI and the browser bindings.

use serde::{Deserialize, Serialize};

use crate::error::Violation;

/// Anything that can judge a raw field value
pub trait Rules {
    /// Returns the first violated rule for `value`, or `None` when it is acceptable.
    fn evaluate(&self, value: &str) -> Option<Violation>;
}

/// Constraints for a free-text field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringRules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    pub email: bool,
}

impl StringRules {
    /// All constraints off
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }
}

impl Rules for StringRules {
    fn evaluate(&self, value: &str) -> Option<Violation> {
        crate::string::evaluate(value, self)
    }
}

/// Constraints for a field holding a number typed as text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberRules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    pub integer: bool,
}

impl NumberRules {
    /// All constraints off
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

impl Rules for NumberRules {
    fn evaluate(&self, value: &str) -> Option<Violation> {
        crate::numeric::evaluate(value, self)
    }
}

/// Rules for one field of a form, tagged by `kind`
///
/// ```toml
/// [forms.supportTier.fields.cost]
/// kind = "number"
/// required = true
/// integer = true
/// minValue = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldRules {
    Text(StringRules),
    Number(NumberRules),
}

impl FieldRules {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldRules::Text(_) => "text",
            FieldRules::Number(_) => "number",
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            FieldRules::Text(rules) => rules.required,
            FieldRules::Number(rules) => rules.required,
        }
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        FieldRules::Text(StringRules::default())
    }
}

impl Rules for FieldRules {
    fn evaluate(&self, value: &str) -> Option<Violation> {
        match self {
            FieldRules::Text(rules) => rules.evaluate(value),
            FieldRules::Number(rules) => rules.evaluate(value),
        }
    }
}

impl From<StringRules> for FieldRules {
    fn from(rules: StringRules) -> Self {
        FieldRules::Text(rules)
    }
}

impl From<NumberRules> for FieldRules {
    fn from(rules: NumberRules) -> Self {
        FieldRules::Number(rules)
    }
}
