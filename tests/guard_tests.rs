//! Route guard behavior through a running gateway

mod common;

use folio::auth::AUTH_COOKIE;
use reqwest::StatusCode;

fn cookie_header() -> String {
    format!("{}=some-token", AUTH_COOKIE)
}

#[tokio::test]
async fn test_protected_route_without_cookie_redirects_to_login() {
    let gateway = common::spawn_gateway("http://127.0.0.1:1/api").await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/dashboard", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/login");

    // A stale cookie is deleted on the way out
    let set_cookie = resp.headers()["set-cookie"].to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{}=;", AUTH_COOKIE)));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_nested_protected_route_redirects_too() {
    let gateway = common::spawn_gateway("http://127.0.0.1:1/api").await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/dashboard/certificates", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/login");
}

#[tokio::test]
async fn test_login_with_cookie_redirects_to_dashboard() {
    let gateway = common::spawn_gateway("http://127.0.0.1:1/api").await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/login", gateway))
        .header("Cookie", cookie_header())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/dashboard");
}

#[tokio::test]
async fn test_login_without_cookie_is_served() {
    let gateway = common::spawn_gateway("http://127.0.0.1:1/api").await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/login", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_with_cookie_reaches_the_handler() {
    let api = common::mock_portfolio_api().await;
    let gateway = common::spawn_gateway(&api).await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/dashboard/certificates", gateway))
        .header("Cookie", format!("{}={}", AUTH_COOKIE, common::TEST_TOKEN))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let gateway = common::spawn_gateway("http://127.0.0.1:1/api").await;
    let client = common::no_redirect_client();

    let resp = client
        .get(format!("{}/health", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
