//! Serializer port for validation results.

use crate::validation::{domain::ValidationResult, error::ExecutorResult};

/// Port for rendering a [`ValidationResult`] into a response body.
pub trait ResultSerializer: Send + Sync {
    /// Serializes the result.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Serialization`](crate::validation::error::ExecutorError::Serialization)
    /// when the result cannot be rendered.
    fn to_json(&self, result: &ValidationResult) -> ExecutorResult<String>;
}
