//! Folio - portfolio admin CLI and dashboard gateway
//!
//! This is the library interface for Folio, allowing programmatic access to
//! the session, the resource clients, and the list view-state pipeline.

pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod portfolio;

pub use config::Config;
pub use error::Error;
