//! Uniform CRUD wrapper over one REST collection
//!
//! Every entity type gets the same five operations. Ids are always
//! server-assigned; the client never generates them.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use crate::error::Result;
use crate::portfolio::Validate;

use super::api::ApiClient;

pub struct ResourceClient<'a, T> {
    api: &'a ApiClient,
    path: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T> ResourceClient<'a, T>
where
    T: DeserializeOwned,
{
    pub fn new(api: &'a ApiClient, path: &'static str) -> Self {
        Self {
            api,
            path,
            _marker: PhantomData,
        }
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let resp = self.api.authed_request(Method::GET, self.path)?.send().await?;
        if !resp.status().is_success() {
            return Err(ApiClient::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        let resp = self
            .api
            .authed_request(Method::GET, &self.item_path(id))?
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiClient::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// POST a new entity. Validation runs before any network call.
    pub async fn create<I>(&self, input: &I) -> Result<T>
    where
        I: Serialize + Validate,
    {
        input.validate()?;
        let resp = self
            .api
            .authed_request(Method::POST, self.path)?
            .json(input)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiClient::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// PUT a full replacement keyed by id. Validation runs before any
    /// network call.
    pub async fn update<I>(&self, id: &str, input: &I) -> Result<T>
    where
        I: Serialize + Validate,
    {
        input.validate()?;
        let resp = self
            .api
            .authed_request(Method::PUT, &self.item_path(id))?
            .json(input)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiClient::error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let resp = self
            .api
            .authed_request(Method::DELETE, &self.item_path(id))?
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiClient::error_from_response(resp).await);
        }
        Ok(())
    }
}
