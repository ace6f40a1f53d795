//! Built-in validator applied to every request.

use serde_json::Value;

use crate::validation::{
    domain::{PluginRequest, ValidationResult},
    ports::validator::{Validator, ValidatorOutcome},
};

/// Key used for errors about the body as a whole.
pub const REQUEST_BODY_KEY: &str = "request_body";

/// Checks that a request body is a plugin-settings document.
///
/// Settings arrive as a JSON object mapping property names to string
/// values. An absent or blank body is accepted; anything that is not a
/// JSON object is rejected under [`REQUEST_BODY_KEY`], and each property
/// holding something other than a string or `null` is rejected under its
/// own name.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::{
///     domain::PluginRequest,
///     ports::Validator,
///     services::DefaultValidator,
/// };
///
/// let request = PluginRequest::new("validate").with_body(r#"{"port": 8153}"#);
/// let result = DefaultValidator.validate(&request).expect("never faults");
/// assert_eq!(result.errors()[0].key(), "port");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl DefaultValidator {
    fn check(body: &str) -> ValidationResult {
        if body.trim().is_empty() {
            return ValidationResult::new();
        }

        let properties = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(properties)) => properties,
            Ok(other) => {
                return ValidationResult::new().add_error(
                    REQUEST_BODY_KEY,
                    format!("must be a JSON object, found {}", json_kind(&other)),
                );
            }
            Err(error) => {
                return ValidationResult::new()
                    .add_error(REQUEST_BODY_KEY, format!("is not valid JSON: {error}"));
            }
        };

        properties
            .iter()
            .filter(|(_, value)| !matches!(value, Value::String(_) | Value::Null))
            .fold(ValidationResult::new(), |result, (key, value)| {
                result.add_error(
                    key.as_str(),
                    format!("must be a string, found {}", json_kind(value)),
                )
            })
    }
}

impl Validator for DefaultValidator {
    fn validate(&self, request: &PluginRequest) -> ValidatorOutcome {
        Ok(request.body().map_or_else(ValidationResult::new, Self::check))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
