//! Validation executor: runs the validator chain and builds the response.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::validation::{
    adapters::JsonResultSerializer,
    domain::{PluginRequest, PluginResponse, ValidationResult, combine},
    error::ExecutorResult,
    ports::{ResultSerializer, Validator},
    services::{DefaultValidator, ExecutorConfig, FaultPolicy},
};

/// A configured validator slot; `None` slots are skipped.
pub type ValidatorSlot = Option<Arc<dyn Validator>>;

/// Runs the built-in validator followed by the configured validators and
/// translates the merged result into a [`PluginResponse`].
///
/// The validator list is fixed at construction. Each call to
/// [`execute`](Self::execute) starts from a fresh result, so one executor
/// can be shared across threads as long as its validators are reentrant.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::{
///     domain::{PluginRequest, ValidationResult},
///     ports::from_fn,
///     services::ValidationExecutor,
/// };
///
/// let executor = ValidationExecutor::builder()
///     .with_validator(from_fn(|_| {
///         Ok(ValidationResult::new().add_error("api_token", "must not be blank"))
///     }))
///     .build();
///
/// let response = executor
///     .execute(&PluginRequest::new("go.plugin-settings.validate"))
///     .expect("validators should run");
/// assert_eq!(response.status_code(), 412);
/// assert_eq!(response.body(), r#"[{"key":"api_token","message":"must not be blank"}]"#);
/// ```
pub struct ValidationExecutor<S = JsonResultSerializer>
where
    S: ResultSerializer,
{
    validators: Vec<ValidatorSlot>,
    serializer: Arc<S>,
    config: ExecutorConfig,
}

impl ValidationExecutor<JsonResultSerializer> {
    /// Creates an executor over the given validator slots with the default
    /// configuration and JSON serialization.
    #[must_use]
    pub fn new(validators: impl IntoIterator<Item = ValidatorSlot>) -> Self {
        Self::with_serializer(
            validators,
            Arc::new(JsonResultSerializer),
            ExecutorConfig::default(),
        )
    }

    /// Starts building an executor.
    #[must_use]
    pub fn builder() -> ValidationExecutorBuilder {
        ValidationExecutorBuilder::default()
    }
}

impl<S> ValidationExecutor<S>
where
    S: ResultSerializer,
{
    /// Creates an executor with an explicit serializer and configuration.
    #[must_use]
    pub fn with_serializer(
        validators: impl IntoIterator<Item = ValidatorSlot>,
        serializer: Arc<S>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            validators: validators.into_iter().collect(),
            serializer,
            config,
        }
    }

    /// Returns the executor configuration.
    #[must_use]
    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Returns the number of configured slots, including empty ones.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.validators.len()
    }

    /// Validates `request` and returns the response for the host.
    ///
    /// The built-in [`DefaultValidator`] always runs first. With no
    /// configured validators its result is returned as a success as-is.
    /// Otherwise every present validator runs in order and the merged
    /// result decides between [`PluginResponse::Success`] and
    /// [`PluginResponse::ValidationFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Validator`](crate::validation::error::ExecutorError::Validator)
    /// when a validator faults under [`FaultPolicy::FailFast`], and
    /// [`ExecutorError::Serialization`](crate::validation::error::ExecutorError::Serialization)
    /// when the result cannot be serialized.
    pub fn execute(&self, request: &PluginRequest) -> ExecutorResult<PluginResponse> {
        let initial = DefaultValidator.validate(request)?;

        if self.validators.is_empty() {
            debug!(
                request = request.name(),
                "No additional validator(s) are provided. Skipping the validation for request {}",
                request.name()
            );
            return Ok(PluginResponse::Success(self.serializer.to_json(&initial)?));
        }

        let merged = self
            .validators
            .iter()
            .flatten()
            .try_fold(initial, |accumulated, validator| {
                self.run(validator.as_ref(), request)
                    .map(|result| combine(accumulated, result))
            })?;

        let body = self.serializer.to_json(&merged)?;
        if merged.is_empty() {
            debug!(request = request.name(), "Validation successful.");
            Ok(PluginResponse::Success(body))
        } else {
            debug!(request = request.name(), "Validation failed {merged}.");
            Ok(PluginResponse::ValidationFailed(body))
        }
    }

    fn run(
        &self,
        validator: &dyn Validator,
        request: &PluginRequest,
    ) -> ExecutorResult<ValidationResult> {
        match validator.validate(request) {
            Ok(result) => Ok(result),
            Err(fault) => match self.config.fault_policy {
                FaultPolicy::FailFast => Err(fault.into()),
                FaultPolicy::Capture => {
                    debug!(request = request.name(), %fault, "Captured validator fault.");
                    Ok(ValidationResult::new().add_error(fault.key(), fault.message()))
                }
            },
        }
    }
}

impl<S> fmt::Debug for ValidationExecutor<S>
where
    S: ResultSerializer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationExecutor")
            .field("slots", &self.validators.len())
            .field(
                "present",
                &self.validators.iter().filter(|slot| slot.is_some()).count(),
            )
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ValidationExecutor`].
#[derive(Default)]
pub struct ValidationExecutorBuilder {
    validators: Vec<ValidatorSlot>,
    config: ExecutorConfig,
}

impl ValidationExecutorBuilder {
    /// Appends a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Some(Arc::new(validator)));
        self
    }

    /// Appends a shared validator.
    #[must_use]
    pub fn with_shared_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validators.push(Some(validator));
        self
    }

    /// Appends a slot that may be empty; empty slots are skipped at run time.
    #[must_use]
    pub fn with_slot(mut self, slot: ValidatorSlot) -> Self {
        self.validators.push(slot);
        self
    }

    /// Sets the executor configuration.
    #[must_use]
    pub const fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds an executor that serializes results as JSON.
    #[must_use]
    pub fn build(self) -> ValidationExecutor {
        self.build_with_serializer(Arc::new(JsonResultSerializer))
    }

    /// Builds an executor with a custom serializer.
    #[must_use]
    pub fn build_with_serializer<S>(self, serializer: Arc<S>) -> ValidationExecutor<S>
    where
        S: ResultSerializer,
    {
        ValidationExecutor::with_serializer(self.validators, serializer, self.config)
    }
}
