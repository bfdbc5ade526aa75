//! Petition Validation
//!
//! Field and form validation for the petition client. The same rule sets and
//! evaluators run natively (server side, tooling) and in the browser through
//! the WASM bindings.
//!
//! ```
//! use petition_validation::{bind, StringRules};
//!
//! let mut email = bind(StringRules::new().required().max_length(256).email(), "");
//! assert_eq!(email.error(), Some("This field is required"));
//!
//! email.set_value("a@b.co");
//! assert!(email.is_valid());
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod messages;
pub mod numeric;
pub mod presets;
pub mod rules;
pub mod string;

pub use config::FormsConfig;
pub use email::is_valid_email;
pub use error::{FormError, Violation};
pub use field::{bind, Field, ValidationState};
pub use form::{must_differ, must_match, Form, FormSchema, ValidationResult};
pub use messages::format_server_response;
pub use numeric::evaluate as evaluate_number;
pub use rules::{FieldRules, NumberRules, Rules, StringRules};
pub use string::evaluate as evaluate_text;
