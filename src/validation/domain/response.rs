//! Response envelope returned to the host.

use std::fmt;

/// Status of a plugin response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// The request passed validation.
    Success,
    /// One or more validators reported violations.
    ValidationFailed,
}

impl ResponseStatus {
    /// Returns the numeric code the host expects for this status.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::ValidationFailed => 412,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::ValidationFailed => "validation_failed",
        };
        write!(f, "{label}")
    }
}

/// Outcome of validating a request, carrying the serialized result.
///
/// Both variants share the same payload shape; only the status differs.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::domain::{PluginResponse, ResponseStatus};
///
/// let response = PluginResponse::ValidationFailed(r#"[{"key":"url","message":"required"}]"#.to_owned());
/// assert_eq!(response.status(), ResponseStatus::ValidationFailed);
/// assert_eq!(response.status_code(), 412);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginResponse {
    /// Validation passed; body is the serialized (possibly empty) result.
    Success(String),
    /// Validation failed; body is the serialized merged result.
    ValidationFailed(String),
}

impl PluginResponse {
    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        match self {
            Self::Success(_) => ResponseStatus::Success,
            Self::ValidationFailed(_) => ResponseStatus::ValidationFailed,
        }
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status().code()
    }

    /// Returns the serialized validation result.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Success(body) | Self::ValidationFailed(body) => body,
        }
    }

    /// Returns `true` for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Consumes the response, returning its body.
    #[must_use]
    pub fn into_body(self) -> String {
        match self {
            Self::Success(body) | Self::ValidationFailed(body) => body,
        }
    }
}
