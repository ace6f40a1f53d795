//! Validation outcome accumulated across validators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rule violation reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    key: String,
    message: String,
}

impl ValidationError {
    /// Creates a violation for the named field.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the field the violation refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Ordered collection of rule violations for one request.
///
/// Results are combined by value with [`ValidationResult::merge`] (or the
/// free function [`combine`]); the left operand's errors come first.
/// Serializes as a JSON array of `{"key", "message"}` objects.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::domain::ValidationResult;
///
/// let first = ValidationResult::new().add_error("url", "must not be blank");
/// let second = ValidationResult::new().add_error("token", "must not be blank");
///
/// let merged = first.merge(second);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged.errors()[0].key(), "url");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a violation and returns the updated result.
    #[must_use]
    pub fn add_error(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.push(ValidationError::new(key, message));
        self
    }

    /// Returns the result with `other`'s errors appended after this one's.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Returns `true` if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the recorded violations in merge order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Combines two results into one, `left` errors first.
#[must_use]
pub fn combine(left: ValidationResult, right: ValidationResult) -> ValidationResult {
    left.merge(right)
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "[{rendered}]")
    }
}
