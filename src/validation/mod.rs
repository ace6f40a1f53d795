//! Request validation for plugin API calls.
//!
//! This module merges the built-in settings check with any number of
//! plugin-supplied validators and turns the merged outcome into a
//! response envelope the host understands.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::PluginRequest`], [`domain::ValidationResult`], [`domain::PluginResponse`]
//! - **Ports**: [`ports::Validator`], [`ports::ResultSerializer`]
//! - **Adapters**: [`adapters::JsonResultSerializer`]
//! - **Services**: [`services::DefaultValidator`], [`services::ValidationExecutor`]
//!
//! # Example
//!
//! ```
//! use plugin_base::validation::{
//!     domain::{PluginRequest, ValidationResult},
//!     ports::from_fn,
//!     services::ValidationExecutor,
//! };
//!
//! let executor = ValidationExecutor::builder()
//!     .with_validator(from_fn(|_| Ok(ValidationResult::new())))
//!     .build();
//!
//! let request = PluginRequest::new("go.plugin-settings.validate")
//!     .with_body(r#"{"server_url":"https://ci.example.com"}"#);
//! let response = executor.execute(&request).expect("validators should run");
//! assert!(response.is_success());
//! assert_eq!(response.body(), "[]");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
