//! Live binding between one input value and its rule set
//!
//! A [`Field`] owns its current value and the error derived from it. The only
//! way to change the value is [`Field::set_value`], which re-evaluates the
//! rules before returning, so a read never observes a stale error.

use serde::{Deserialize, Serialize};

use crate::rules::Rules;

/// Observable state of one field: the raw input and its first violation, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    pub value: String,
    pub error: Option<String>,
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// A bound field
#[derive(Debug, Clone)]
pub struct Field<R> {
    rules: R,
    state: ValidationState,
}

/// Bind `rules` to a field starting at `initial_value`
///
/// The initial value is evaluated once, so a required field that starts empty
/// is already invalid.
pub fn bind<R: Rules>(rules: R, initial_value: &str) -> Field<R> {
    Field::with_value(rules, initial_value)
}

impl<R: Rules> Field<R> {
    /// Field starting from an empty value
    pub fn new(rules: R) -> Self {
        Self::with_value(rules, "")
    }

    pub fn with_value(rules: R, initial_value: impl Into<String>) -> Self {
        let mut field = Self {
            rules,
            state: ValidationState::default(),
        };
        field.set_value(initial_value);
        field
    }

    /// Replace the value and recompute the error
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.state.error = self.rules.evaluate(&value).map(|violation| violation.to_string());
        self.state.value = value;
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn into_state(self) -> ValidationState {
        self.state
    }
}
