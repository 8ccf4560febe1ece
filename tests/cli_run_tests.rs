//! Command dispatch tests against a mock catalog endpoint.

use clap::Parser;
use emojiterm::catalog::CatalogError;
use emojiterm::cli::{run, Args};
use emojiterm::config::Settings;
use emojiterm::render::RenderError;
use emojiterm::Error;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG_BODY: &str =
    r#"{"smile": "smile.png", "smiley": "smiley.png", "smiley_cat": "cat.png"}"#;

async fn catalog_server(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/emojis"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        token: None,
        catalog_url: format!("{}/emojis", server.uri()),
    }
}

#[tokio::test]
async fn test_run_without_mode_or_term_is_usage_error() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm"]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, Error::Usage));
    assert_eq!(err.to_string(), "Usage: emojiterm [-l] [-a] [searchword]");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_run_empty_term_is_usage_error() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm", ""]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, Error::Usage));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_run_list_succeeds() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm", "-l", "smi"]);

    run(&args, &settings_for(&mock_server)).await.unwrap();
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_run_list_unmatched_is_not_found() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm", "-l", "xyz"]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert_eq!(err.to_string(), "Not found: xyz");
}

#[tokio::test]
async fn test_run_render_unmatched_is_not_found() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm", "frown"]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(ref nf) if nf.term == "frown"));
}

#[tokio::test]
async fn test_run_bad_matte_fails_before_fetching() {
    let mock_server = catalog_server(200, CATALOG_BODY).await;
    let args = Args::parse_from(["emojiterm", "--matte", "teal", "smile"]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, Error::Render(RenderError::ColorParse { .. })));
    assert_eq!(err.to_string(), "matte color : teal is not a hex-color");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_run_surfaces_catalog_auth_failure() {
    let mock_server = catalog_server(401, r#"{"message":"Bad credentials"}"#).await;
    let args = Args::parse_from(["emojiterm", "smile"]);

    let err = run(&args, &settings_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, Error::Catalog(CatalogError::Auth { status: 401, .. })));
}
