//! Gateway route handlers
//!
//! JSON view-models only; presentation is someone else's job. Every
//! dashboard handler builds an `ApiClient` from the request's auth cookie
//! and forwards to the external API, so the cookie stays the single source
//! of session truth.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::auth::cookie;
use crate::client::{self, ApiClient, ResourceClient};
use crate::error::{Error, Result};
use crate::pipeline::{self, CategoryFilter, ListEntry, ListQuery, SortOrder};
use crate::portfolio::models::{
    Certificate, Education, Experience, NewCertificate, NewEducation, NewExperience, NewSkill,
    NewUser, Skill, User,
};
use crate::portfolio::{summary, Resource, Validate};

use super::paths;
use super::server::SharedState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub category: Option<String>,
    /// Search term, `?q=`
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl ListParams {
    fn into_query(self) -> ListQuery {
        ListQuery {
            category: self
                .category
                .map(|c| CategoryFilter::parse(&c))
                .unwrap_or_default(),
            search: self.q.unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Auth routes

/// The guard already bounced authenticated visitors to the dashboard, so
/// anyone reaching this handler is anonymous.
pub async fn login_page() -> impl IntoResponse {
    Json(ApiResponse::ok(json!({ "login": paths::LOGIN })))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(form): Json<LoginForm>,
) -> Result<Response> {
    // Form-level check; the session layer itself has no local precondition
    if form.username.trim().is_empty() || form.password.is_empty() {
        return Err(Error::Validation(
            "username and password are required".to_string(),
        ));
    }

    let token = client::auth::login(
        state.http(),
        &state.config.api.base_url,
        &form.username,
        &form.password,
    )
    .await?;

    let cookie = cookie::build_auth_cookie(&token, state.config.auth.token_ttl_days);
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|e| Error::Other(format!("token is not cookie-safe: {}", e)))?;

    let mut response =
        Json(ApiResponse::ok(json!({ "redirect": paths::HOME }))).into_response();
    response.headers_mut().append(header::SET_COOKIE, cookie);
    Ok(response)
}

pub async fn logout() -> Response {
    let mut response =
        Json(ApiResponse::ok(json!({ "redirect": paths::LOGIN }))).into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_static(cookie::clear_auth_cookie()),
    );
    response
}

// Dashboard routes

pub async fn dashboard_summary(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<summary::Summary>>> {
    let api = authed_client(&state, &headers)?;
    let raw = api.summary_raw().await?;
    Ok(Json(ApiResponse::ok(summary::normalize(&raw))))
}

pub async fn list_resource(
    State(state): State<SharedState>,
    Path(resource): Path<String>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Value>>> {
    let resource = Resource::parse(&resource)?;
    let api = authed_client(&state, &headers)?;
    let query = params.into_query();

    let view = match resource {
        Resource::Users => list_view(api.users(), &query).await?,
        Resource::Skills => list_view(api.skills(), &query).await?,
        Resource::Certificates => list_view(api.certificates(), &query).await?,
        Resource::Experiences => list_view(api.experiences(), &query).await?,
        Resource::Education => list_view(api.education(), &query).await?,
    };

    Ok(Json(ApiResponse::ok(view)))
}

pub async fn get_resource(
    State(state): State<SharedState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Value>>> {
    let resource = Resource::parse(&resource)?;
    let api = authed_client(&state, &headers)?;

    let data = match resource {
        Resource::Users => serde_json::to_value(api.users().get(&id).await?)?,
        Resource::Skills => serde_json::to_value(api.skills().get(&id).await?)?,
        Resource::Certificates => serde_json::to_value(api.certificates().get(&id).await?)?,
        Resource::Experiences => serde_json::to_value(api.experiences().get(&id).await?)?,
        Resource::Education => serde_json::to_value(api.education().get(&id).await?)?,
    };

    Ok(Json(ApiResponse::ok(data)))
}

pub async fn create_resource(
    State(state): State<SharedState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>)> {
    let resource = Resource::parse(&resource)?;
    let api = authed_client(&state, &headers)?;

    let data = match resource {
        Resource::Users => create_one::<User, NewUser>(&api, resource, body).await?,
        Resource::Skills => create_one::<Skill, NewSkill>(&api, resource, body).await?,
        Resource::Certificates => {
            create_one::<Certificate, NewCertificate>(&api, resource, body).await?
        }
        Resource::Experiences => {
            create_one::<Experience, NewExperience>(&api, resource, body).await?
        }
        Resource::Education => create_one::<Education, NewEducation>(&api, resource, body).await?,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}

pub async fn update_resource(
    State(state): State<SharedState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Value>>> {
    let resource = Resource::parse(&resource)?;
    let api = authed_client(&state, &headers)?;

    let data = match resource {
        Resource::Users => update_one::<User, NewUser>(&api, resource, &id, body).await?,
        Resource::Skills => update_one::<Skill, NewSkill>(&api, resource, &id, body).await?,
        Resource::Certificates => {
            update_one::<Certificate, NewCertificate>(&api, resource, &id, body).await?
        }
        Resource::Experiences => {
            update_one::<Experience, NewExperience>(&api, resource, &id, body).await?
        }
        Resource::Education => {
            update_one::<Education, NewEducation>(&api, resource, &id, body).await?
        }
    };

    Ok(Json(ApiResponse::ok(data)))
}

pub async fn delete_resource(
    State(state): State<SharedState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<&'static str>>> {
    let resource = Resource::parse(&resource)?;
    let api = authed_client(&state, &headers)?;

    match resource {
        Resource::Users => api.users().delete(&id).await?,
        Resource::Skills => api.skills().delete(&id).await?,
        Resource::Certificates => api.certificates().delete(&id).await?,
        Resource::Experiences => api.experiences().delete(&id).await?,
        Resource::Education => api.education().delete(&id).await?,
    }

    Ok(Json(ApiResponse::ok("deleted")))
}

// Helpers

/// Build an API client from the request's auth cookie. The guard keeps
/// anonymous traffic out of the dashboard, but handlers still refuse to run
/// without a token rather than assume the middleware is wired.
fn authed_client(state: &SharedState, headers: &HeaderMap) -> Result<ApiClient> {
    let token = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(cookie::token_from_cookie_header)
        .ok_or(Error::Unauthenticated)?;
    Ok(ApiClient::from_parts(state.http().clone(), &state.config.api.base_url).with_token(token))
}

/// Fetch a collection and run it through the pipeline. The category options
/// are derived from the unfiltered fetch, not the filtered result.
async fn list_view<T>(client: ResourceClient<'_, T>, query: &ListQuery) -> Result<Value>
where
    T: Serialize + DeserializeOwned + ListEntry,
{
    let items = client.list().await?;
    let categories = pipeline::category_options(&items);
    let filtered = pipeline::apply(&items, query);
    Ok(json!({ "items": filtered, "categories": categories }))
}

async fn create_one<T, I>(api: &ApiClient, resource: Resource, body: Value) -> Result<Value>
where
    T: Serialize + DeserializeOwned,
    I: Serialize + DeserializeOwned + Validate,
{
    let input: I = parse_body(body)?;
    let created = ResourceClient::<T>::new(api, resource.path())
        .create(&input)
        .await?;
    Ok(serde_json::to_value(created)?)
}

async fn update_one<T, I>(api: &ApiClient, resource: Resource, id: &str, body: Value) -> Result<Value>
where
    T: Serialize + DeserializeOwned,
    I: Serialize + DeserializeOwned + Validate,
{
    let input: I = parse_body(body)?;
    let updated = ResourceClient::<T>::new(api, resource.path())
        .update(id, &input)
        .await?;
    Ok(serde_json::to_value(updated)?)
}

fn parse_body<I: DeserializeOwned>(body: Value) -> Result<I> {
    serde_json::from_value(body).map_err(|e| Error::Validation(e.to_string()))
}
