use crate::client::ApiError;
use crate::models::ClusterReport;

/// Anything that can produce the cluster's node list.
///
/// [`crate::WeaviateClient`] implements this against `GET /v1/nodes`. The
/// check evaluates any implementor, so it can run against a fixed report
/// without a network.
pub trait NodeSource: Send + Sync {
    /// Fetch and decode the current node list. `Err` on connection,
    /// HTTP status, body read, or decode failure.
    fn cluster_report(
        &self,
    ) -> impl std::future::Future<Output = Result<ClusterReport, ApiError>> + Send;
}
