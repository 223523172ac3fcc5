use std::time::Duration;

use url::Url;

use crate::client::{ApiError, HttpClient};
use crate::models::ClusterReport;
use crate::source::NodeSource;

/// Client for the Weaviate v1 REST API.
///
/// Only the unauthenticated node-status endpoint is used.
#[derive(Debug, Clone)]
pub struct WeaviateClient {
    http: HttpClient,
}

impl WeaviateClient {
    /// Create a new Weaviate API client.
    ///
    /// `base_url` should be the root URL (e.g. `http://localhost:8080`).
    /// The `/v1/` prefix is appended automatically; any path already on
    /// `base_url` is kept.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let url = format!("{}/v1/", base_url.trim_end_matches('/'));
        Ok(Self {
            http: HttpClient::new(&url, timeout)?,
        })
    }

    /// GET `/v1/nodes`
    pub async fn nodes(&self) -> Result<ClusterReport, ApiError> {
        self.http.get("nodes").await
    }

    /// The API root this client talks to, ending in `/v1/`.
    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }
}

impl NodeSource for WeaviateClient {
    async fn cluster_report(&self) -> Result<ClusterReport, ApiError> {
        self.nodes().await
    }
}
