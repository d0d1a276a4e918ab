//! Shared test support: an in-process mock of the external portfolio API
//! and a gateway spawner, both on ephemeral ports.

// Not every test binary uses every helper here.
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use folio::api::{create_router, AppState};
use folio::portfolio::models::Certificate;
use folio::Config;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
pub const TEST_TOKEN: &str = "test-token";

/// Serve any router on an ephemeral port, returning its base URL
pub async fn serve_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{}", addr)
}

pub fn seed_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "1".to_string(),
            name: "AWS CCP".to_string(),
            platform: "AWS".to_string(),
            date: "2023-01-01".to_string(),
            url: "https://aws.amazon.com/certification".to_string(),
            category: "cloud".to_string(),
        },
        Certificate {
            id: "2".to_string(),
            name: "PSM I".to_string(),
            platform: "Scrum.org".to_string(),
            date: "2022-06-01".to_string(),
            url: "https://scrum.org/psm".to_string(),
            category: "gestão".to_string(),
        },
        Certificate {
            id: "3".to_string(),
            name: "Terraform Associate".to_string(),
            platform: "HashiCorp".to_string(),
            date: "2021-11-05".to_string(),
            url: "https://hashicorp.com/certification".to_string(),
            category: "cloud".to_string(),
        },
    ]
}

type CertStore = Arc<Mutex<Vec<Certificate>>>;

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

async fn auth_handler(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    let username = body.get("username").and_then(|v| v.as_str()).unwrap_or("");
    let password = body.get("password").and_then(|v| v.as_str()).unwrap_or("");

    if username == TEST_USER && password == TEST_PASSWORD {
        (StatusCode::OK, Json(json!({ "token": TEST_TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credentials" })),
        )
    }
}

async fn list_certificates(State(store): State<CertStore>, headers: HeaderMap) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }
    let certs = store.lock().unwrap().clone();
    Json(certs).into_response()
}

async fn create_certificate(
    State(store): State<CertStore>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }

    let mut certs = store.lock().unwrap();
    let created = Certificate {
        id: format!("{}", certs.len() + 1),
        name: body["name"].as_str().unwrap_or_default().to_string(),
        platform: body["platform"].as_str().unwrap_or_default().to_string(),
        date: body["date"].as_str().unwrap_or_default().to_string(),
        url: body["url"].as_str().unwrap_or_default().to_string(),
        category: body["category"].as_str().unwrap_or_default().to_string(),
    };
    certs.push(created.clone());

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_certificate(
    State(store): State<CertStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }

    let certs = store.lock().unwrap();
    match certs.iter().find(|c| c.id == id) {
        Some(cert) => Json(cert.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

async fn update_certificate(
    State(store): State<CertStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }

    let mut certs = store.lock().unwrap();
    match certs.iter_mut().find(|c| c.id == id) {
        Some(cert) => {
            cert.name = body["name"].as_str().unwrap_or(&cert.name).to_string();
            cert.platform = body["platform"].as_str().unwrap_or(&cert.platform).to_string();
            cert.date = body["date"].as_str().unwrap_or(&cert.date).to_string();
            cert.url = body["url"].as_str().unwrap_or(&cert.url).to_string();
            cert.category = body["category"].as_str().unwrap_or(&cert.category).to_string();
            Json(cert.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

async fn delete_certificate(
    State(store): State<CertStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }

    let mut certs = store.lock().unwrap();
    let before = certs.len();
    certs.retain(|c| c.id != id);

    if certs.len() == before {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn summary_handler(headers: HeaderMap) -> impl IntoResponse {
    if !bearer_ok(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing token" })))
            .into_response();
    }
    // Mixed field-name generations on purpose
    Json(json!({
        "totalProjects": 4,
        "skills_count": "9",
        "certificates": [{}, {}, {}],
        "visits": 1042
    }))
    .into_response()
}

/// Mock of the external portfolio API with a seeded certificate collection
pub async fn mock_portfolio_api() -> String {
    let store: CertStore = Arc::new(Mutex::new(seed_certificates()));

    let router = Router::new()
        .route("/auth", post(auth_handler))
        .route("/certificates", get(list_certificates).post(create_certificate))
        .route(
            "/certificates/{id}",
            get(get_certificate)
                .put(update_certificate)
                .delete(delete_certificate),
        )
        .route("/summary", get(summary_handler))
        .with_state(store);

    serve_router(router).await
}

/// Mock API whose collection endpoint always fails with HTTP 500
pub async fn failing_portfolio_api() -> String {
    async fn boom() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "backend exploded" })),
        )
    }

    let router = Router::new().route("/certificates", get(boom));
    serve_router(router).await
}

pub fn gateway_config(api_base_url: &str) -> Config {
    toml::from_str(&format!("[api]\nbase_url = \"{}\"\n", api_base_url))
        .expect("test config must parse")
}

/// Spawn the gateway wired to the given external API, returning its base URL
pub async fn spawn_gateway(api_base_url: &str) -> String {
    let state = Arc::new(AppState::new(gateway_config(api_base_url)));
    serve_router(create_router(state)).await
}

/// A client that surfaces redirects instead of following them
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build test client")
}
