//! Error types for validator execution.
//!
//! Rule violations are data ([`ValidationResult`](super::domain::ValidationResult)),
//! not errors. The types here cover validators that could not run at all
//! and results that could not be serialized.

use thiserror::Error;

/// Key used for captured faults when a validator does not name one.
pub const DEFAULT_FAULT_KEY: &str = "validator";

/// A validator failed to run to completion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validator '{key}' failed: {message}")]
pub struct ValidatorFault {
    key: String,
    message: String,
}

impl ValidatorFault {
    /// Creates a fault attributed to the named validator or field.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a fault with the default key.
    #[must_use]
    pub fn unattributed(message: impl Into<String>) -> Self {
        Self::new(DEFAULT_FAULT_KEY, message)
    }

    /// Returns the key the fault is reported under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the fault description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by [`ValidationExecutor::execute`](super::services::ValidationExecutor::execute).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    /// A validator faulted under the fail-fast policy.
    #[error(transparent)]
    Validator(#[from] ValidatorFault),

    /// The merged result could not be serialized.
    #[error("failed to serialize validation result: {0}")]
    Serialization(String),
}

impl ExecutorError {
    /// Creates a serialization error from any displayable cause.
    #[must_use]
    pub fn serialization(cause: impl std::fmt::Display) -> Self {
        Self::Serialization(cause.to_string())
    }
}

/// Result type for executor operations.
pub type ExecutorResult<T> = Result<T, ExecutorError>;
