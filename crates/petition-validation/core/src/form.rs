//! Forms: named sets of bound fields with a submission gate
//!
//! Each field is validated on its own. Cross-field rules (a new password that
//! must differ from the current one, a confirmation that must match) are
//! composed by the caller with [`must_differ`] and [`must_match`] and folded
//! into the [`ValidationResult`] before deciding whether to submit.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::field::{Field, ValidationState};
use crate::rules::{FieldRules, Rules};

/// The rule sets of every field in one form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldRules>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.fields.insert(name.into(), rules.into());
        self
    }

    pub fn rules(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// One-shot validation of submitted values
    ///
    /// Fields missing from `values` are validated as empty strings. Values for
    /// names the schema does not know are ignored.
    pub fn validate(&self, values: &HashMap<String, String>) -> ValidationResult {
        let mut result = ValidationResult::success();
        for (name, rules) in &self.fields {
            let value = values.get(name).map(String::as_str).unwrap_or("");
            if let Some(violation) = rules.evaluate(value) {
                result.insert(name.clone(), violation.to_string());
            }
        }
        result
    }

    /// Bind every field, all starting empty
    pub fn bind(&self) -> Form {
        Form {
            fields: self
                .fields
                .iter()
                .map(|(name, rules)| (name.clone(), Field::new(rules.clone())))
                .collect(),
        }
    }
}

/// Field errors keyed by field name, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Record an error for a field, keeping an earlier one if present
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record a cross-field check outcome against `field`
    pub fn check(&mut self, field: impl Into<String>, outcome: Option<String>) -> &mut Self {
        if let Some(message) = outcome {
            self.insert(field, message);
        }
        self
    }
}

/// A live form: one bound field per schema entry
#[derive(Debug, Clone)]
pub struct Form {
    fields: BTreeMap<String, Field<FieldRules>>,
}

impl Form {
    /// Update one field and return its fresh state
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&ValidationState, FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_value(value);
        Ok(field.state())
    }

    pub fn state(&self, name: &str) -> Result<&ValidationState, FormError> {
        self.fields
            .get(name)
            .map(Field::state)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Current errors of every field
    pub fn errors(&self) -> ValidationResult {
        let mut result = ValidationResult::success();
        for (name, field) in &self.fields {
            if let Some(error) = field.error() {
                result.insert(name.clone(), error);
            }
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(Field::is_valid)
    }

    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().to_string()))
            .collect()
    }

    /// Submission gate: the values when every field is valid, otherwise every error
    pub fn submit(&self) -> Result<BTreeMap<String, String>, ValidationResult> {
        self.submit_with(ValidationResult::success())
    }

    /// Like [`Form::submit`], with cross-field errors the caller already collected
    pub fn submit_with(
        &self,
        extra: ValidationResult,
    ) -> Result<BTreeMap<String, String>, ValidationResult> {
        let mut result = self.errors();
        for (field, message) in extra.errors {
            result.insert(field, message);
        }

        if result.has_errors() {
            tracing::debug!(
                invalid_fields = result.errors.len(),
                "form submission blocked by validation errors"
            );
            return Err(result);
        }
        Ok(self.values())
    }
}

/// Reports `message` when both values are filled in and equal
pub fn must_differ(
    first: &ValidationState,
    second: &ValidationState,
    message: &str,
) -> Option<String> {
    let both_filled = !first.value.is_empty() && !second.value.is_empty();
    (both_filled && first.value == second.value).then(|| message.to_string())
}

/// Reports `message` when the values differ
pub fn must_match(
    first: &ValidationState,
    second: &ValidationState,
    message: &str,
) -> Option<String> {
    (first.value != second.value).then(|| message.to_string())
}
