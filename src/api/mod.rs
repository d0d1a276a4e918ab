//! Dashboard gateway: HTTP server, handlers, route table

pub mod paths;
pub mod routes;
pub mod server;

pub use server::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl IntoResponse for crate::error::Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(routes::ApiResponse::<()>::err(self.to_string())),
        )
            .into_response()
    }
}
