use tracing::{error, info, warn};
use weaviate_api::{ApiError, ClusterReport, NodeHealth, NodeSource, WeaviateClient};

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::outcome::CheckOutcome;

pub const UNHEALTHY_MESSAGE: &str = "One or more nodes are unhealthy.";
pub const UNAVAILABLE_MESSAGE: &str = "One or more nodes are unavailable.";

/// Validate `config`, then query the configured Weaviate instance and
/// classify it.
pub async fn run(config: &CheckConfig) -> CheckOutcome {
    run_with(config, |config| {
        WeaviateClient::new(&config.url, config.timeout)
    })
    .await
}

/// [`run`] with a caller-supplied client constructor.
///
/// `connect` is only called once validation has passed, so an invalid
/// configuration never reaches the network.
pub async fn run_with<S, F>(config: &CheckConfig, connect: F) -> CheckOutcome
where
    S: NodeSource,
    F: FnOnce(&CheckConfig) -> Result<S, ApiError>,
{
    if let Err(e) = config.validate() {
        warn!(error = %e, "invalid configuration");
        return e.into();
    }

    info!(url = %config.url, "executing check");

    let source = match connect(config) {
        Ok(source) => source,
        Err(e) => return failed(e.into()),
    };
    evaluate(&source).await
}

/// Fetch the node list from `source` and reduce it to one outcome.
///
/// Fetch and decode failures are terminal and reported as CRITICAL.
pub async fn evaluate<S: NodeSource>(source: &S) -> CheckOutcome {
    match source.cluster_report().await {
        Ok(report) => reduce(&report),
        Err(e) => failed(e.into()),
    }
}

/// Classify a node list.
///
/// Any `UNHEALTHY` node makes the outcome CRITICAL, otherwise any
/// `UNAVAILABLE` node makes it WARNING. Every node is logged, whatever
/// the result. Unrecognized statuses count as neither.
pub fn reduce(report: &ClusterReport) -> CheckOutcome {
    let mut found_unhealthy = false;
    let mut found_unavailable = false;

    for node in &report.nodes {
        info!(node = %node.name, status = %node.status, "Node {} is {}", node.name, node.status);
        match node.status {
            NodeHealth::Unhealthy => found_unhealthy = true,
            NodeHealth::Unavailable => found_unavailable = true,
            NodeHealth::Healthy | NodeHealth::Other(_) => {}
        }
    }

    if found_unhealthy {
        CheckOutcome::critical(UNHEALTHY_MESSAGE)
    } else if found_unavailable {
        CheckOutcome::warning(UNAVAILABLE_MESSAGE)
    } else {
        CheckOutcome::ok()
    }
}

fn failed(err: CheckError) -> CheckOutcome {
    error!(error = %err, "node status query failed");
    err.into()
}
