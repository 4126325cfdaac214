//! Tests for the HTTP client module

use super::*;
use crate::error::{Error, Result};
use crate::pagination::PageSelector;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn get_value(client: &HttpClient, path: &str, config: RequestConfig) -> Result<Value> {
    client.get_json_with_config(path, config).await
}

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .token("some-magic-token")
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_API_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.token.is_none());
    assert!(config.user_agent.starts_with("bl-cli/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .token("abc")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.token.as_deref(), Some("abc"));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_config_debug_redacts_token() {
    let config = HttpClientConfig::builder().token("super-secret").build();
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("tag_name", "web")
        .page(PageSelector::with_per_page(50))
        .header("X-Request-Id", "abc123");

    assert_eq!(config.query.get("tag_name"), Some(&"web".to_string()));
    assert_eq!(config.query.get("page"), Some(&"1".to_string()));
    assert_eq!(config.query.get("per_page"), Some(&"50".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[tokio::test]
async fn test_http_client_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .and(header("Authorization", "Bearer some-magic-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {"email": "sammy@example.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = get_value(&client, "/v2/account", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data["account"]["email"], "sammy@example.com");
}

#[tokio::test]
async fn test_http_client_page_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/servers"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut selector = PageSelector::first();
    selector.advance();
    selector.advance();

    let data = get_value(&client, "v2/servers", RequestConfig::new().page(selector))
        .await
        .unwrap();

    assert_eq!(data, json!({ "servers": [] }));
}

#[tokio::test]
async fn test_http_client_custom_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/regions"))
        .and(header("X-Trace", "on"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "regions": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Trace", "on")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let data = get_value(
        &client,
        "/v2/regions",
        RequestConfig::new().header("X-Request-Id", "req-456"),
    )
    .await
    .unwrap();

    assert_eq!(data, json!({ "regions": [] }));
}

#[tokio::test]
async fn test_http_client_api_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/servers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "id": "unauthorized",
            "message": "Unable to authenticate you."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = get_value(&client, "/v2/servers", RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            id,
            message,
        } => {
            assert_eq!(status, 401);
            assert_eq!(id.as_deref(), Some("unauthorized"));
            assert_eq!(message, "Unable to authenticate you.");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_plain_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = get_value(&client, "/v2/missing", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_http_client_api_error_without_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/servers/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Server not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = get_value(&client, "/v2/servers/99", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, id: None, .. }));
    assert_eq!(err.to_string(), "API error 404: Server not found");
}

#[tokio::test]
async fn test_http_client_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = get_value(&client, "/v2/flaky", RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_http_client_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sizes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = get_value(&client, "/v2/sizes", RequestConfig::new()).await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/vpcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vpcs": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Absolute URLs bypass the configured base
    let config = HttpClientConfig::builder()
        .base_url("https://unused.invalid")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let url = format!("{}/v2/vpcs", mock_server.uri());
    let data = get_value(&client, &url, RequestConfig::new()).await.unwrap();

    assert_eq!(data, json!({ "vpcs": [] }));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains(DEFAULT_API_URL));
}
