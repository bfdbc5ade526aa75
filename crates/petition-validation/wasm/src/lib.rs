//! Petition Validation WASM
//!
//! WebAssembly bindings for the petition client's forms. Rule objects use the
//! same camelCase shape as `forms.toml`, so a page can pass
//! `{ required: true, maxLength: 128 }` straight through.

use std::collections::HashMap;

use petition_validation as validation;
use petition_validation::{
    Field, FieldRules, FormError, FormSchema, NumberRules, Rules, StringRules,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_rules<T: DeserializeOwned>(rules: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(rules).map_err(|e| {
        let message = format!("Failed to parse rules: {}", e);
        web_sys::console::warn_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}

fn preset(form: &str) -> Result<FormSchema, JsValue> {
    validation::presets::by_name(form).ok_or_else(|| {
        JsValue::from_str(&FormError::UnknownForm(form.to_string()).to_string())
    })
}

/// Plain objects and `null` rather than `Map` and `undefined`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_maps_as_objects(true)
        .serialize_missing_as_null(true);
    Ok(value.serialize(&serializer)?)
}

/// Evaluate a text value
///
/// # Example (JavaScript)
/// ```javascript
/// const error = evaluateText(email, { required: true, maxLength: 256, email: true });
/// // undefined when valid, otherwise e.g. "Invalid email format"
/// ```
#[wasm_bindgen(js_name = evaluateText)]
pub fn evaluate_text(value: &str, rules: JsValue) -> Result<Option<String>, JsValue> {
    let rules: StringRules = parse_rules(rules)?;
    Ok(rules.evaluate(value).map(|v| v.to_string()))
}

/// Evaluate a number typed into a text box
#[wasm_bindgen(js_name = evaluateNumber)]
pub fn evaluate_number(value: &str, rules: JsValue) -> Result<Option<String>, JsValue> {
    let rules: NumberRules = parse_rules(rules)?;
    Ok(rules.evaluate(value).map(|v| v.to_string()))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email)
}

/// Sentence-case a backend status text for display
#[wasm_bindgen(js_name = formatServerResponse)]
pub fn format_server_response_js(message: &str) -> String {
    validation::format_server_response(message)
}

/// Schema of a built-in form, e.g. `presetRules("register")`
#[wasm_bindgen(js_name = presetRules)]
pub fn preset_rules(form: &str) -> Result<JsValue, JsValue> {
    to_js(&preset(form)?)
}

/// Validate submitted values against a built-in form
///
/// Returns `{ errors: { field: message } }`; an empty `errors` object means
/// the form may be submitted.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let schema = preset(form)?;
    let values: HashMap<String, String> = serde_wasm_bindgen::from_value(values)?;
    to_js(&schema.validate(&values))
}

/// A live field for one input element
///
/// # Example (JavaScript)
/// ```javascript
/// const title = FieldBinding.text({ required: true, maxLength: 128 }, "");
/// input.addEventListener("input", (e) => {
///     title.setValue(e.target.value);
///     helper.textContent = title.error ?? "";
/// });
/// ```
#[wasm_bindgen]
pub struct FieldBinding {
    inner: Field<FieldRules>,
}

#[wasm_bindgen]
impl FieldBinding {
    /// Bind text rules
    pub fn text(rules: JsValue, initial: &str) -> Result<FieldBinding, JsValue> {
        let rules: StringRules = parse_rules(rules)?;
        Ok(Self::bind(rules.into(), initial))
    }

    /// Bind number rules
    pub fn number(rules: JsValue, initial: &str) -> Result<FieldBinding, JsValue> {
        let rules: NumberRules = parse_rules(rules)?;
        Ok(Self::bind(rules.into(), initial))
    }

    /// Bind rules tagged with `kind: "text" | "number"`
    #[wasm_bindgen(js_name = fromRules)]
    pub fn from_rules(rules: JsValue, initial: &str) -> Result<FieldBinding, JsValue> {
        let rules: FieldRules = parse_rules(rules)?;
        Ok(Self::bind(rules, initial))
    }

    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: &str) {
        self.inner.set_value(value);
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.inner.value().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.inner.error().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// `{ value, error }` with `error: null` when valid
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }
}

impl FieldBinding {
    fn bind(rules: FieldRules, initial: &str) -> Self {
        Self {
            inner: validation::bind(rules, initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn js<T: Serialize>(value: &T) -> JsValue {
        serde_wasm_bindgen::to_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_evaluate_text() {
        let rules = js(&StringRules::new().required().max_length(128));
        assert_eq!(
            evaluate_text("", rules.clone()).unwrap().as_deref(),
            Some("This field is required")
        );
        assert_eq!(evaluate_text("Save the bees", rules).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_evaluate_number() {
        let rules = js(&NumberRules::new().min_value(0.0));
        assert_eq!(evaluate_number("0", rules.clone()).unwrap(), None);
        assert!(evaluate_number("-1", rules.clone()).unwrap().is_some());
        assert_eq!(
            evaluate_number("", rules).unwrap().as_deref(),
            Some("This field must be numeric")
        );
    }

    #[wasm_bindgen_test]
    fn test_malformed_rules() {
        assert!(evaluate_text("x", JsValue::from_str("not rules")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_field_binding() {
        let mut field = FieldBinding::text(js(&StringRules::new().max_length(2)), "").unwrap();
        field.set_value("ab");
        field.set_value("abc");
        assert_eq!(field.value(), "abc");
        assert!(!field.valid());
        assert_eq!(
            field.error().as_deref(),
            Some("This field cannot exceed 2 characters")
        );
    }

    #[wasm_bindgen_test]
    fn test_email_and_messages() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
        assert_eq!(
            format_server_response_js("Forbidden: Email already in use"),
            "Email already in use"
        );
    }

    #[wasm_bindgen_test]
    fn test_unknown_preset() {
        assert!(preset_rules("checkout").is_err());
        assert!(preset_rules("register").is_ok());
    }
}
