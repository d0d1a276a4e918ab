//! HTTP client for the external portfolio API

pub mod api;
pub mod auth;
pub mod resource;

pub use api::ApiClient;
pub use resource::ResourceClient;
