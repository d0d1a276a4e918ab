//! Base client for the external portfolio API
//!
//! One `ApiClient` wraps a shared `reqwest::Client`, the validated base URL,
//! and the optional bearer token. Every call is a single best-effort round
//! trip: no retries, no caching. Dropping an in-flight future cancels it.

use reqwest::Method;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::portfolio::models::{Certificate, Education, Experience, Skill, User};
use crate::portfolio::Resource;

use super::resource::ResourceClient;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration. Fails fast if the base URL is
    /// missing or malformed.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            reqwest::Client::new(),
            &config.api.base_url,
        ))
    }

    pub fn from_parts(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token; it is sent verbatim on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start an authenticated request. Fails locally, without a network
    /// call, when no token is present.
    pub(crate) fn authed_request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let token = self.token.as_deref().ok_or(Error::Unauthenticated)?;
        Ok(self
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(token))
    }

    /// Map a non-2xx response into an `Error::Api` carrying the status code
    /// and the server's message when it sent one.
    pub(crate) async fn error_from_response(resp: reqwest::Response) -> Error {
        let status = resp.status().as_u16();
        let message = match resp.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| "request failed".to_string()),
            Err(_) => "request failed".to_string(),
        };
        Error::Api { status, message }
    }

    pub fn users(&self) -> ResourceClient<'_, User> {
        ResourceClient::new(self, Resource::Users.path())
    }

    pub fn skills(&self) -> ResourceClient<'_, Skill> {
        ResourceClient::new(self, Resource::Skills.path())
    }

    pub fn certificates(&self) -> ResourceClient<'_, Certificate> {
        ResourceClient::new(self, Resource::Certificates.path())
    }

    pub fn experiences(&self) -> ResourceClient<'_, Experience> {
        ResourceClient::new(self, Resource::Experiences.path())
    }

    pub fn education(&self) -> ResourceClient<'_, Education> {
        ResourceClient::new(self, Resource::Education.path())
    }

    /// Fetch the loosely-typed dashboard summary as raw JSON; callers run it
    /// through `portfolio::summary::normalize`.
    pub async fn summary_raw(&self) -> Result<Value> {
        let resp = self.authed_request(Method::GET, "summary")?.send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> Config {
        toml::from_str(&format!("[api]\nbase_url = \"{}\"\n", base_url)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::new(&test_config("http://localhost:8080/api/")).unwrap();
        assert_eq!(
            client.endpoint("/certificates"),
            "http://localhost:8080/api/certificates"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(ApiClient::new(&test_config("not a url")).is_err());
    }

    #[test]
    fn test_request_without_token_fails_locally() {
        let client = ApiClient::new(&test_config("http://localhost:8080/api")).unwrap();
        let result = client.authed_request(Method::GET, "certificates");
        assert!(matches!(result, Err(Error::Unauthenticated)));
    }
}
