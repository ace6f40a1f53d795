//! Incoming plugin API request.

/// A request sent by the host to a plugin.
///
/// Only the request name and body matter to validation; the extension
/// fields are carried so validators can branch on the API version.
///
/// # Examples
///
/// ```
/// use plugin_base::validation::domain::PluginRequest;
///
/// let request = PluginRequest::new("go.plugin-settings.validate")
///     .with_body(r#"{"api_url":"https://example.com"}"#);
/// assert_eq!(request.name(), "go.plugin-settings.validate");
/// assert!(request.body().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRequest {
    name: String,
    extension: Option<String>,
    extension_version: Option<String>,
    body: Option<String>,
}

impl PluginRequest {
    /// Creates a request with the given name and no body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: None,
            extension_version: None,
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the extension name and version the host is speaking.
    #[must_use]
    pub fn with_extension(
        mut self,
        extension: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.extension = Some(extension.into());
        self.extension_version = Some(version.into());
        self
    }

    /// Returns the request name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the extension name, if the host supplied one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Returns the extension version, if the host supplied one.
    #[must_use]
    pub fn extension_version(&self) -> Option<&str> {
        self.extension_version.as_deref()
    }
}
