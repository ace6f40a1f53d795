//! Adapter implementations of the validation ports.

pub mod json;

pub use json::JsonResultSerializer;
