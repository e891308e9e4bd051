//! Integration tests for the dispatch pipeline against a mock HTTP server:
//! success unwrapping, failure classification, and the local/remote error
//! split.

use mockito::Matcher;
use serde_json::json;
use stratus_client::{Client, ConfigError, Error, ErrorKind};

fn client_for(server: &mockito::ServerGuard) -> Client {
    Client::builder()
        .token("test-token")
        .organization("acme")
        .base_url(server.url())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn success_envelope_is_unwrapped() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/organizations/acme/databases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"databases": [{"name": "app"}, {"name": "analytics"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let databases = client.databases().list(None).await.unwrap();
    let names: Vec<_> = databases.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["app", "analytics"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn bearer_token_and_correlation_id_are_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/organizations/acme/groups")
        .match_header("authorization", "Bearer test-token")
        .match_header("x-request-id", Matcher::Regex("[0-9a-f-]{36}".into()))
        .with_status(200)
        .with_body(r#"{"groups": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let groups = client.groups().list(None).await.unwrap();
    assert!(groups.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_classified_with_request_context() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/databases/missing")
        .with_status(404)
        .with_body(r#"{"error": {"message": "database not found"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .databases()
        .retrieve("missing", None)
        .await
        .unwrap_err();
    let api = err.as_api().expect("remote failure should be an ApiError");
    assert_eq!(api.kind, ErrorKind::NotFound);
    assert_eq!(api.status, Some(404));
    assert_eq!(api.message, "database not found");
    let context = api.request_context.as_ref().unwrap();
    assert_eq!(context.method, "GET");
    assert_eq!(context.path, "/v1/organizations/acme/databases/missing");
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/databases")
        .with_status(429)
        .with_body(r#"{"error": {"message": "too many requests", "retry_after": 7}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.databases().list(None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert!(api.is_rate_limited());
    assert!(api.is_retryable());
    assert!(api.is_client_error());
    assert_eq!(api.retry_after_seconds(), Some(7));
}

#[tokio::test]
async fn server_error_is_retryable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/groups")
        .with_status(503)
        .with_body(r#"{"message": "upstream unavailable"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.groups().list(None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::ServerError);
    assert!(api.is_server_error());
    assert!(api.is_retryable());
    assert_eq!(api.message, "upstream unavailable");
}

#[tokio::test]
async fn string_error_envelope_is_normalized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/groups/bad")
        .with_status(400)
        .with_body(r#"{"error": "invalid group name"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.groups().retrieve("bad", None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::InvalidRequest);
    assert_eq!(api.message, "invalid group name");
}

#[tokio::test]
async fn unrecognized_error_body_lands_in_details() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/databases")
        .with_status(403)
        .with_body(r#"{"foo": "bar"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.databases().list(None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::Forbidden);
    assert!(api.is_auth_error());
    assert_eq!(api.message, "Unknown error");
    let details = api.details.as_ref().unwrap();
    assert_eq!(details.get("details"), Some(&json!({"foo": "bar"})));
}

#[tokio::test]
async fn non_json_error_body_is_still_classified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/organizations/acme/databases")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.databases().list(None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::ServerError);
    assert_eq!(api.message, "<html>bad gateway</html>");
}

#[tokio::test]
async fn missing_organization_is_a_local_error() {
    let server = mockito::Server::new_async().await;
    let client = Client::builder()
        .token("test-token")
        .base_url(server.url())
        .build()
        .unwrap();

    let err = client.databases().list(None).await.unwrap_err();
    assert!(err.as_api().is_none());
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingOrganization)
    ));
}

#[tokio::test]
async fn per_call_override_beats_the_default_org() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/organizations/umbrella/databases")
        .with_status(200)
        .with_body(r#"{"databases": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.databases().list(Some("umbrella")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Nothing listens on port 1; the connect is refused before any exchange.
    let client = Client::builder()
        .token("test-token")
        .organization("acme")
        .base_url("http://127.0.0.1:1")
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.databases().list(None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::NetworkError);
    assert_eq!(api.status, None);
    assert!(api.is_retryable());
}

#[tokio::test]
async fn empty_success_body_is_fine() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/organizations/acme/groups/staging")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client.groups().delete("staging", None).await.unwrap();
    mock.assert_async().await;
}
