//! Port contracts for request validation.
//!
//! Ports define the capabilities the executor consumes without binding it
//! to a particular implementation.

pub mod serializer;
pub mod validator;

pub use serializer::ResultSerializer;
pub use validator::{FnValidator, Validator, ValidatorOutcome, from_fn};
