//! Error types for Folio

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'folio init' first.")]
    ConfigNotFound,

    #[error("Not authenticated. Run 'folio login <username>' first.")]
    Unauthenticated,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown resource '{0}'")]
    UnknownResource(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl Error {
    /// HTTP status the gateway reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Unauthenticated | Error::AuthFailed(_) => 401,
            Error::Api { status, .. } => *status,
            Error::Validation(_) => 400,
            Error::UnknownResource(_) => 404,
            Error::Http(_) => 502,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
