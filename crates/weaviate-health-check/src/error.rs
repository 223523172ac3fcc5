use weaviate_api::ApiError;

use crate::outcome::CheckState;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("--url or WEAVIATE_URL environment variable is required")]
    Configuration,
    #[error("Error getting data from weaviate: {0}")]
    Fetch(#[source] ApiError),
    #[error("Error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),
    #[error("Error unmarshalling json: {0}")]
    Parse(#[source] serde_json::Error),
}

impl CheckError {
    /// Severity this error is reported with.
    pub fn state(&self) -> CheckState {
        match self {
            Self::Configuration => CheckState::Warning,
            Self::Fetch(_) | Self::ReadBody(_) | Self::Parse(_) => CheckState::Critical,
        }
    }
}

impl From<ApiError> for CheckError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Body(e) => Self::ReadBody(e),
            ApiError::Decode(e) => Self::Parse(e),
            other => Self::Fetch(other),
        }
    }
}
