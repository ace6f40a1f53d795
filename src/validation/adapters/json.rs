//! `serde_json` implementation of the result serializer port.

use crate::validation::{
    domain::ValidationResult,
    error::{ExecutorError, ExecutorResult},
    ports::ResultSerializer,
};

/// Serializes validation results as a compact JSON array.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::{
///     adapters::JsonResultSerializer,
///     domain::ValidationResult,
///     ports::ResultSerializer,
/// };
///
/// let result = ValidationResult::new().add_error("url", "must not be blank");
/// let json = JsonResultSerializer.to_json(&result).expect("serializable");
/// assert_eq!(json, r#"[{"key":"url","message":"must not be blank"}]"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResultSerializer;

impl ResultSerializer for JsonResultSerializer {
    fn to_json(&self, result: &ValidationResult) -> ExecutorResult<String> {
        serde_json::to_string(result).map_err(ExecutorError::serialization)
    }
}
