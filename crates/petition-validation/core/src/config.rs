// File: src/config.rs
// Purpose: Form rule sets loaded from forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::FormError;
use crate::form::FormSchema;
use crate::presets;

/// Default config file name
pub const DEFAULT_PATH: &str = "forms.toml";

/// Every form the application knows, keyed by form name
///
/// ```toml
/// # Start from the built-in presets (default: true)
/// include_presets = true
///
/// [forms.register.fields.email]
/// kind = "text"
/// required = true
/// maxLength = 256
/// email = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Whether the built-in presets are loaded underneath the file's forms
    #[serde(default = "default_true")]
    pub include_presets: bool,

    #[serde(default)]
    pub forms: BTreeMap<String, FormSchema>,
}

fn default_true() -> bool {
    true
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            include_presets: true,
            forms: presets::all(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the presets.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "forms config not found, using presets");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forms config: {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse forms config: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            forms = config.forms.len(),
            "loaded forms config"
        );
        Ok(config)
    }

    /// Load configuration from default path (./forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_PATH)
    }

    /// Parse a TOML document, layering it over the presets unless disabled
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let parsed: FormsConfig = toml::from_str(content)?;
        if !parsed.include_presets {
            return Ok(parsed);
        }

        let mut config = Self::default();
        config.merge(parsed);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Forms in `other` replace same-named forms here
    pub fn merge(&mut self, other: FormsConfig) {
        self.forms.extend(other.forms);
    }

    pub fn form(&self, name: &str) -> Result<&FormSchema, FormError> {
        self.forms
            .get(name)
            .ok_or_else(|| FormError::UnknownForm(name.to_string()))
    }

    pub fn form_names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FieldRules, NumberRules, StringRules};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_presets() {
        let config = FormsConfig::default();
        assert!(config.include_presets);
        assert_eq!(config.forms, presets::all());
    }

    #[test]
    fn test_empty_config() {
        let config = FormsConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_file_form_replaces_preset() {
        let toml = r#"
            [forms.login.fields.username]
            kind = "text"
            required = true
            maxLength = 32
        "#;
        let config = FormsConfig::from_toml_str(toml).unwrap();

        let login = config.form("login").unwrap();
        assert_eq!(login.fields.len(), 1);
        assert_eq!(
            login.rules("username"),
            Some(&FieldRules::Text(StringRules::new().required().max_length(32)))
        );
        // Untouched presets survive
        assert!(config.form("register").is_ok());
    }

    #[test]
    fn test_presets_can_be_disabled() {
        let toml = r#"
            include_presets = false

            [forms.pledge.fields.amount]
            kind = "number"
            minValue = 1
            maxValue = 10000
        "#;
        let config = FormsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.form_names().collect::<Vec<_>>(), vec!["pledge"]);
        assert_eq!(
            config.form("pledge").unwrap().rules("amount"),
            Some(&FieldRules::Number(
                NumberRules::new().min_value(1.0).max_value(10000.0)
            ))
        );
        assert!(matches!(config.form("register"), Err(FormError::UnknownForm(_))));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let toml = r#"
            [forms.odd.fields.when]
            kind = "date"
        "#;
        assert!(FormsConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FormsConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed: FormsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
