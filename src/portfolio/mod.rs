//! Portfolio domain: entities, resource registry, summary normalization

pub mod models;
pub mod summary;

pub use models::Validate;
pub use summary::Summary;

use crate::error::{Error, Result};

/// The REST collections the external API exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Resource {
    Users,
    Skills,
    Certificates,
    Experiences,
    Education,
}

impl Resource {
    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Skills => "skills",
            Resource::Certificates => "certificates",
            Resource::Experiences => "experiences",
            Resource::Education => "education",
        }
    }

    pub fn all() -> [Resource; 5] {
        [
            Resource::Users,
            Resource::Skills,
            Resource::Certificates,
            Resource::Experiences,
            Resource::Education,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|r| r.path() == raw)
            .ok_or_else(|| Error::UnknownResource(raw.to_string()))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
