//! End-to-end check runs against a mocked Weaviate `/v1/nodes` endpoint.

use std::time::Duration;

use weaviate_health_check::evaluator::{UNAVAILABLE_MESSAGE, UNHEALTHY_MESSAGE};
use weaviate_health_check::{CheckConfig, CheckOutcome, CheckState, run};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Helper: mount a single /v1/nodes response and run the check against it
// ---------------------------------------------------------------------------

async fn check_against(response: ResponseTemplate) -> CheckOutcome {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/nodes"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    run(&CheckConfig::new(server.uri())).await
}

async fn check_body(body: &str) -> CheckOutcome {
    check_against(
        ResponseTemplate::new(200)
            .insert_header("content-type", "application/json")
            .set_body_string(body),
    )
    .await
}

// ---------------------------------------------------------------------------
// Node status classification
// ---------------------------------------------------------------------------

mod classification {
    use super::*;

    #[tokio::test]
    async fn all_healthy_is_ok() {
        let outcome = check_body(
            r#"{"nodes":[{"name":"n1","status":"HEALTHY"},{"name":"n2","status":"HEALTHY"}]}"#,
        )
        .await;
        assert_eq!(outcome, CheckOutcome::ok());
    }

    #[tokio::test]
    async fn unhealthy_node_is_critical() {
        let outcome = check_body(
            r#"{"nodes":[{"name":"n1","status":"HEALTHY"},{"name":"n2","status":"UNHEALTHY"}]}"#,
        )
        .await;
        assert_eq!(outcome.state, CheckState::Critical);
        assert_eq!(outcome.message.as_deref(), Some(UNHEALTHY_MESSAGE));
        assert_eq!(
            outcome.to_string(),
            "CRITICAL: One or more nodes are unhealthy."
        );
    }

    #[tokio::test]
    async fn unavailable_node_is_warning() {
        let outcome = check_body(r#"{"nodes":[{"name":"n1","status":"UNAVAILABLE"}]}"#).await;
        assert_eq!(outcome.state, CheckState::Warning);
        assert_eq!(outcome.message.as_deref(), Some(UNAVAILABLE_MESSAGE));
    }

    #[tokio::test]
    async fn unhealthy_takes_precedence_over_unavailable() {
        let outcome = check_body(
            r#"{"nodes":[{"name":"n1","status":"UNHEALTHY"},{"name":"n2","status":"UNAVAILABLE"}]}"#,
        )
        .await;
        assert_eq!(outcome.state, CheckState::Critical);
        assert_eq!(outcome.message.as_deref(), Some(UNHEALTHY_MESSAGE));
    }

    #[tokio::test]
    async fn no_nodes_is_ok() {
        let outcome = check_body(r#"{"nodes":[]}"#).await;
        assert_eq!(outcome, CheckOutcome::ok());
    }

    #[tokio::test]
    async fn minimal_output_with_nulls_is_ok() {
        let outcome = check_body(
            r#"{"nodes":[
                {"name":"weaviate-0","status":"HEALTHY","version":"1.24.1","gitHash":null,
                 "stats":null,"shards":null,"batchStats":{"queueLength":0,"ratePerSecond":0}},
                {"name":"weaviate-1","status":"HEALTHY","version":"1.24.1","gitHash":"a1b2c3d",
                 "stats":{"shardCount":1,"objectCount":null},
                 "shards":[{"class":"Article","objectCount":12}]}
            ]}"#,
        )
        .await;
        assert_eq!(outcome, CheckOutcome::ok());
    }

    #[tokio::test]
    async fn minimal_output_with_unavailable_node_is_warning() {
        let outcome = check_body(
            r#"{"nodes":[
                {"name":"weaviate-0","status":"HEALTHY","stats":null,"shards":null},
                {"status":"UNAVAILABLE","stats":null,"shards":null}
            ]}"#,
        )
        .await;
        assert_eq!(outcome, CheckOutcome::warning(UNAVAILABLE_MESSAGE));
    }

    #[tokio::test]
    async fn full_document_is_accepted() {
        let outcome = check_against(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "nodes": [{
                "name": "weaviate-7",
                "status": "HEALTHY",
                "version": "1.16-alpha.0",
                "gitHash": "8cd2efa",
                "stats": {"shardCount": 2, "objectCount": 23328},
                "shards": [
                    {"name": "azuawSAd9312F", "class": "Class_7", "objectCount": 13328},
                    {"name": "cupazAaASdfPP", "class": "Foo", "objectCount": 10000}
                ]
            }]
        })))
        .await;
        assert_eq!(outcome, CheckOutcome::ok());
    }
}

// ---------------------------------------------------------------------------
// Configuration gate
// ---------------------------------------------------------------------------

mod configuration {
    use super::*;

    #[tokio::test]
    async fn empty_url_warns_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = run(&CheckConfig::default()).await;

        assert_eq!(outcome.state, CheckState::Warning);
        assert_eq!(
            outcome.message.as_deref(),
            Some("--url or WEAVIATE_URL environment variable is required")
        );
        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn trailing_slash_on_url_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/nodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nodes": []})))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = run(&CheckConfig::new(format!("{}/", server.uri()))).await;
        assert_eq!(outcome, CheckOutcome::ok());
    }
}

// ---------------------------------------------------------------------------
// Fetch and parse failures
// ---------------------------------------------------------------------------

mod failures {
    use super::*;

    #[tokio::test]
    async fn invalid_json_is_critical() {
        let outcome = check_body("not-json").await;
        assert_eq!(outcome.state, CheckState::Critical);
        let message = outcome.message.unwrap();
        assert!(
            message.starts_with("Error unmarshalling json: "),
            "got: {message}"
        );
    }

    #[tokio::test]
    async fn missing_nodes_array_is_critical() {
        let outcome = check_body(r#"{"status":"ok"}"#).await;
        assert_eq!(outcome.state, CheckState::Critical);
        let message = outcome.message.unwrap();
        assert!(
            message.starts_with("Error unmarshalling json: "),
            "got: {message}"
        );
        assert!(message.contains("nodes"), "got: {message}");
    }

    #[tokio::test]
    async fn server_error_is_critical() {
        let outcome =
            check_against(ResponseTemplate::new(500).set_body_string("internal error")).await;
        assert_eq!(outcome.state, CheckState::Critical);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Error getting data from weaviate: API returned 500: internal error")
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_critical() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let outcome = run(&CheckConfig::new(uri)).await;
        assert_eq!(outcome.state, CheckState::Critical);
        let message = outcome.message.unwrap();
        assert!(
            message.starts_with("Error getting data from weaviate: "),
            "got: {message}"
        );
    }

    #[tokio::test]
    async fn slow_server_hits_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/nodes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"nodes": []}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = CheckConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
        let outcome = run(&config).await;
        assert_eq!(outcome.state, CheckState::Critical);
    }

    #[tokio::test]
    async fn malformed_url_is_critical() {
        let outcome = run(&CheckConfig::new("not a url")).await;
        assert_eq!(outcome.state, CheckState::Critical);
    }
}
