//! Validator port.
//!
//! Defines the capability every request validator exposes.

use crate::validation::{
    domain::{PluginRequest, ValidationResult},
    error::ValidatorFault,
};

/// Result type for a single validator run.
pub type ValidatorOutcome = Result<ValidationResult, ValidatorFault>;

/// Port for request validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Report rule violations in the returned [`ValidationResult`]
/// - Reserve [`ValidatorFault`] for being unable to validate at all
/// - Be reentrant; one executor may be shared across threads
#[cfg_attr(test, mockall::automock)]
pub trait Validator: Send + Sync {
    /// Validates a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorFault`] when the validator cannot run.
    fn validate(&self, request: &PluginRequest) -> ValidatorOutcome;
}

/// Adapts a closure into a [`Validator`].
///
/// # Examples
///
/// ```
/// use plugin_base::validation::{
///     domain::{PluginRequest, ValidationResult},
///     ports::{Validator, from_fn},
/// };
///
/// let validator = from_fn(|request| {
///     let result = ValidationResult::new();
///     Ok(if request.body().is_none() {
///         result.add_error("request_body", "is required")
///     } else {
///         result
///     })
/// });
///
/// let outcome = validator.validate(&PluginRequest::new("validate"));
/// assert_eq!(outcome.map(|result| result.len()), Ok(1));
/// ```
#[derive(Clone)]
pub struct FnValidator<F> {
    check: F,
}

/// Wraps `check` so it can be registered with an executor.
#[must_use]
pub const fn from_fn<F>(check: F) -> FnValidator<F>
where
    F: Fn(&PluginRequest) -> ValidatorOutcome + Send + Sync,
{
    FnValidator { check }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&PluginRequest) -> ValidatorOutcome + Send + Sync,
{
    fn validate(&self, request: &PluginRequest) -> ValidatorOutcome {
        (self.check)(request)
    }
}

impl<F> std::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}
