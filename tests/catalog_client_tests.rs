//! Mock HTTP tests for CatalogClient.
//!
//! These tests cover:
//! - Bearer credential handling
//! - Catalog parsing
//! - Auth and protocol failures
//! - Unreachable endpoints

use emojiterm::catalog::{CatalogClient, CatalogError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG_BODY: &str = r#"{
    "+1": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
    "smile": "https://github.githubassets.com/images/icons/emoji/unicode/1f604.png?v8",
    "smiley": "https://github.githubassets.com/images/icons/emoji/unicode/1f603.png?v8"
}"#;

async fn client_for(server: &MockServer, token: Option<&str>) -> CatalogClient {
    CatalogClient::with_base_url(format!("{}/emojis", server.uri()), token.map(String::from))
        .unwrap()
}

#[tokio::test]
async fn test_fetch_catalog_parses_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/emojis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    let catalog = client.fetch_catalog().await.unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["+1", "smile", "smiley"]);
    assert!(catalog.get("smile").unwrap().ends_with("1f604.png?v8"));
}

#[tokio::test]
async fn test_fetch_catalog_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/emojis"))
        .and(header("authorization", "Bearer ghp_secret"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some("ghp_secret")).await;
    assert!(client.is_authenticated());
    assert!(client.fetch_catalog().await.is_ok());
}

#[tokio::test]
async fn test_fetch_catalog_without_token_sends_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/emojis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    client.fetch_catalog().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    let agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(agent.starts_with("emojiterm/"));
}

#[tokio::test]
async fn test_fetch_catalog_401_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/emojis"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"Bad credentials"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some("wrong")).await;
    match client.fetch_catalog().await {
        Err(CatalogError::Auth { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_catalog_403_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    let result = client.fetch_catalog().await;
    assert!(matches!(
        result,
        Err(CatalogError::Auth { status: 403, ref message }) if message == "rate limited"
    ));
}

#[tokio::test]
async fn test_fetch_catalog_server_error_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    match client.fetch_catalog().await {
        Err(CatalogError::Protocol(msg)) => assert!(msg.contains("500")),
        other => panic!("expected Protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_catalog_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    let result = client.fetch_catalog().await;
    assert!(matches!(result, Err(CatalogError::Protocol(_))));
}

#[tokio::test]
async fn test_fetch_catalog_rejects_non_string_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"smile": 42}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    let result = client.fetch_catalog().await;
    assert!(matches!(result, Err(CatalogError::Protocol(_))));
}

#[tokio::test]
async fn test_fetch_catalog_rejects_empty_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"": "x.png"}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    match client.fetch_catalog().await {
        Err(CatalogError::Protocol(msg)) => assert!(msg.contains("empty emoji name")),
        other => panic!("expected Protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_catalog_empty_object_is_empty_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None).await;
    let catalog = client.fetch_catalog().await.unwrap();
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_fetch_catalog_unreachable_is_network_error() {
    // Nothing listens on the discard port
    let client =
        CatalogClient::with_base_url("http://127.0.0.1:9/emojis".to_string(), None).unwrap();
    let result = client.fetch_catalog().await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}
