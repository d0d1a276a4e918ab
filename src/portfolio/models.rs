//! Entity shapes for the external API collections
//!
//! Ids are server-assigned strings. Dates travel as strings because the API
//! is a black box; parsing happens lazily at the pipeline boundary, and an
//! unparsable date simply reads as `None` there.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::{parse_entry_date, ListEntry};

/// Client-side submit checks, run before any network call
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_date(field: &str, value: &str) -> Result<()> {
    require(field, value)?;
    if parse_entry_date(value).is_none() {
        return Err(Error::Validation(format!(
            "{} must be a date like 2023-01-31",
            field
        )));
    }
    Ok(())
}

fn require_url(field: &str, value: &str) -> Result<()> {
    require(field, value)?;
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(Error::Validation(format!("{} must be an http(s) URL", field)));
    }
    Ok(())
}

// Users

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

impl ListEntry for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.username]
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("username", &self.username)?;
        require("password", &self.password)?;
        if let Some(email) = &self.email {
            if !email.is_empty() && !email.contains('@') {
                return Err(Error::Validation("email is not valid".to_string()));
            }
        }
        Ok(())
    }
}

// Skills

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: Option<u32>,
}

impl ListEntry for Skill {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Validate for NewSkill {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("category", &self.category)
    }
}

// Certificates

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub date: String,
    pub url: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCertificate {
    pub name: String,
    pub platform: String,
    pub date: String,
    pub url: String,
    pub category: String,
}

impl ListEntry for Certificate {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.date)
    }

    // Certificates are also searchable by issuing platform
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.category, &self.platform]
    }
}

impl Validate for NewCertificate {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("platform", &self.platform)?;
        require("category", &self.category)?;
        require_date("date", &self.date)?;
        require_url("url", &self.url)
    }
}

// Experiences

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ListEntry for Experience {
    fn name(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.start_date)
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.company]
    }
}

impl Validate for NewExperience {
    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("company", &self.company)?;
        require_date("start_date", &self.start_date)
    }
}

// Education

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ListEntry for Education {
    fn name(&self) -> &str {
        &self.institution
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.start_date)
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.institution, &self.degree]
    }
}

impl Validate for NewEducation {
    fn validate(&self) -> Result<()> {
        require("institution", &self.institution)?;
        require("degree", &self.degree)?;
        require_date("start_date", &self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificate_input() -> NewCertificate {
        NewCertificate {
            name: "AWS CCP".to_string(),
            platform: "AWS".to_string(),
            date: "2023-01-01".to_string(),
            url: "https://aws.amazon.com/certification".to_string(),
            category: "cloud".to_string(),
        }
    }

    #[test]
    fn test_valid_certificate_passes() {
        assert!(certificate_input().validate().is_ok());
    }

    #[test]
    fn test_certificate_requires_name() {
        let mut input = certificate_input();
        input.name = "  ".to_string();
        assert!(matches!(input.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_certificate_rejects_bad_date() {
        let mut input = certificate_input();
        input.date = "January 2023".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_certificate_rejects_non_http_url() {
        let mut input = certificate_input();
        input.url = "ftp://example.com".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_user_email_shape() {
        let mut input = NewUser {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: Some("not-an-email".to_string()),
            password: "secret".to_string(),
        };
        assert!(input.validate().is_err());
        input.email = Some("ada@example.com".to_string());
        assert!(input.validate().is_ok());
    }
}
