//! Resource clients against a mock external API

mod common;

use folio::client::ApiClient;
use folio::portfolio::models::NewCertificate;
use folio::Error;

fn authed(api_base_url: &str) -> ApiClient {
    ApiClient::from_parts(reqwest::Client::new(), api_base_url).with_token(common::TEST_TOKEN)
}

fn certificate_input() -> NewCertificate {
    NewCertificate {
        name: "CKA".to_string(),
        platform: "CNCF".to_string(),
        date: "2024-03-10".to_string(),
        url: "https://cncf.io/certification/cka".to_string(),
        category: "cloud".to_string(),
    }
}

#[tokio::test]
async fn test_list_without_token_fails_locally() {
    // Nothing is listening on this address; no-token requests never reach it
    let api = ApiClient::from_parts(reqwest::Client::new(), "http://127.0.0.1:1/api");
    let err = api.certificates().list().await.unwrap_err();
    assert!(matches!(err, Error::Unauthenticated));
}

#[tokio::test]
async fn test_list_returns_the_collection() {
    let base = common::mock_portfolio_api().await;
    let certs = authed(&base).certificates().list().await.unwrap();

    assert_eq!(certs.len(), 3);
    assert!(certs.iter().any(|c| c.name == "AWS CCP"));
}

#[tokio::test]
async fn test_get_and_missing_id() {
    let base = common::mock_portfolio_api().await;
    let api = authed(&base);

    let cert = api.certificates().get("1").await.unwrap();
    assert_eq!(cert.name, "AWS CCP");

    let err = api.certificates().get("999").await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_create_then_list_sees_the_new_entity() {
    let base = common::mock_portfolio_api().await;
    let api = authed(&base);

    let created = api.certificates().create(&certificate_input()).await.unwrap();
    assert_eq!(created.name, "CKA");

    let certs = api.certificates().list().await.unwrap();
    assert_eq!(certs.len(), 4);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let base = common::mock_portfolio_api().await;
    let api = authed(&base);

    let mut input = certificate_input();
    input.name = "AWS CCP (renewed)".to_string();

    let updated = api.certificates().update("1", &input).await.unwrap();
    assert_eq!(updated.name, "AWS CCP (renewed)");
    assert_eq!(updated.id, "1");
}

#[tokio::test]
async fn test_delete_then_refetch() {
    let base = common::mock_portfolio_api().await;
    let api = authed(&base);

    api.certificates().delete("2").await.unwrap();

    let certs = api.certificates().list().await.unwrap();
    assert_eq!(certs.len(), 2);
    assert!(certs.iter().all(|c| c.id != "2"));
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_any_network_call() {
    // Dead address again: a network attempt would error differently
    let api = ApiClient::from_parts(reqwest::Client::new(), "http://127.0.0.1:1/api")
        .with_token(common::TEST_TOKEN);

    let mut input = certificate_input();
    input.date = "next spring".to_string();

    let err = api.certificates().create(&input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_server_error_carries_status_and_message() {
    let base = common::failing_portfolio_api().await;
    let err = authed(&base).certificates().list().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 500, .. }));
    let text = err.to_string();
    assert!(text.contains("500"), "got: {}", text);
    assert!(text.contains("backend exploded"), "got: {}", text);
}

#[tokio::test]
async fn test_summary_normalizes_mixed_field_names() {
    let base = common::mock_portfolio_api().await;
    let raw = authed(&base).summary_raw().await.unwrap();
    let summary = folio::portfolio::summary::normalize(&raw);

    assert_eq!(summary.projects, 4);
    assert_eq!(summary.skills, 9);
    assert_eq!(summary.certificates, 3);
    assert_eq!(summary.experiences, 0);
    assert_eq!(summary.visits, Some(1042));
}
