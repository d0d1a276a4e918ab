//! Session lifecycle: an explicit object, not ambient global state
//!
//! The session owns the in-memory mirror of the bearer token; the injected
//! `TokenStore` is the durable backing. Two states, `Anonymous` and
//! `Authenticated`, cycling via `login`/`logout` for the life of the
//! process.

use crate::client::{self, ApiClient};
use crate::config::Config;
use crate::error::Result;

use super::token_store::TokenStore;

pub struct Session {
    http: reqwest::Client,
    base_url: String,
    ttl_days: i64,
    store: Box<dyn TokenStore>,
    token: Option<String>,
}

impl Session {
    /// Build a session, hydrating the token from the store exactly once.
    ///
    /// Fails fast when the external API base URL is missing: operating in a
    /// degraded mode is worse than a loud startup failure.
    pub fn new(config: &Config, store: Box<dyn TokenStore>) -> Result<Self> {
        config.validate()?;
        let token = store.get();
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            ttl_days: config.auth.token_ttl_days,
            store,
            token,
        })
    }

    /// Exchange credentials for a token and persist it. On failure the
    /// session state is left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let token = client::auth::login(&self.http, &self.base_url, username, password).await?;
        self.store.set(&token, self.ttl_days)?;
        self.token = Some(token);
        tracing::info!("logged in as {}", username);
        Ok(())
    }

    /// Drop the token from store and memory. Never fails.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        tracing::info!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// API client carrying the current token, if any
    pub fn api_client(&self) -> ApiClient {
        let client = ApiClient::from_parts(self.http.clone(), &self.base_url);
        match &self.token {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}
