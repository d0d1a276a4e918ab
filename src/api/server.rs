//! Dashboard gateway server

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::guard;
use crate::config::Config;
use crate::error::Result;

use super::routes;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

pub type SharedState = Arc<AppState>;

/// Run the gateway server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    config.validate()?;
    let state = Arc::new(AppState::new(config));

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes and the route guard
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        // Auth
        .route("/login", get(routes::login_page).post(routes::login))
        .route("/logout", post(routes::logout))
        // Dashboard view-models
        .route("/dashboard", get(routes::dashboard_summary))
        .route(
            "/dashboard/{resource}",
            get(routes::list_resource).post(routes::create_resource),
        )
        .route(
            "/dashboard/{resource}/{id}",
            get(routes::get_resource)
                .put(routes::update_resource)
                .delete(routes::delete_resource),
        )
        // Middleware: the guard runs before any handler
        .layer(middleware::from_fn(guard::route_guard))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
