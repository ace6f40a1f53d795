//! Domain types for plugin request validation.
//!
//! These types carry no infrastructure dependencies: a request as the host
//! delivered it, the merged validation outcome, and the response envelope.

mod request;
mod response;
mod result;

pub use request::PluginRequest;
pub use response::{PluginResponse, ResponseStatus};
pub use result::{ValidationError, ValidationResult, combine};
