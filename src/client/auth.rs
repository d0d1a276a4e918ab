//! Credential exchange against the external `POST /auth` endpoint

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

const GENERIC_FAILURE: &str = "authentication failed";

/// Exchange credentials for a bearer token.
///
/// Succeeds only on a 2xx response whose body carries a non-empty `token`
/// field. Any other outcome surfaces the server's message, or a generic
/// one when the server gave none.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    let url = format!("{}/auth", base_url.trim_end_matches('/'));
    let resp = http
        .post(&url)
        .json(&LoginRequest { username, password })
        .send()
        .await?;

    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(Error::AuthFailed(server_message(&body)));
    }

    match body.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        // A 2xx body without a token is still a failed login
        _ => Err(Error::AuthFailed(server_message(&body))),
    }
}

fn server_message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}
