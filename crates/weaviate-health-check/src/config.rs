use std::time::Duration;

use crate::error::CheckError;

/// Environment variable the harness reads the base URL from.
pub const URL_ENV: &str = "WEAVIATE_URL";

/// Resolved check configuration, built by the harness and passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Base URL of the Weaviate instance, e.g. `http://localhost:8080`.
    pub url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl CheckConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Must pass before any network access is attempted.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.url.is_empty() {
            return Err(CheckError::Configuration);
        }
        Ok(())
    }
}
