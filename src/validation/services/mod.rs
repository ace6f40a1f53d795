//! Validation services.
//!
//! [`ValidationExecutor`] orchestrates validation of one request, always
//! running [`DefaultValidator`] ahead of any plugin-supplied validators.

pub mod config;
pub mod default_validator;
pub mod executor;

pub use config::{ExecutorConfig, FaultPolicy};
pub use default_validator::DefaultValidator;
pub use executor::{ValidationExecutor, ValidationExecutorBuilder, ValidatorSlot};
