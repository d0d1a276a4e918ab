//! CLI command implementations

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::api;
use crate::auth::{FileTokenStore, Session};
use crate::cli::{confirm, info, print_categories, print_entry_table, print_summary, success, OutputFormat};
use crate::client::{ApiClient, ResourceClient};
use crate::config::{self, Config};
use crate::pipeline::{self, CategoryFilter, ListEntry, ListQuery, SortOrder};
use crate::portfolio::models::{
    Certificate, Education, Experience, NewCertificate, NewEducation, NewExperience, NewSkill,
    NewUser, Skill, User,
};
use crate::portfolio::{summary, Resource, Validate};

/// Initialize a new folio.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("folio.toml");

    if config_path.exists() {
        crate::cli::warn("folio.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created folio.toml");
    info("Set api.base_url (or FOLIO_API_URL) and run 'folio login <username>'");

    Ok(())
}

/// Log in and persist the bearer token
pub async fn login(username: &str, password: Option<String>) -> Result<()> {
    let config = load_config()?;
    let mut session = open_session(&config)?;

    let password = match password {
        Some(p) => p,
        None => dialoguer::Password::new()
            .with_prompt(format!("Password for {}", username))
            .interact()?,
    };

    // Propagate failures; main reports them exactly once
    session.login(username, &password).await?;
    success(&format!("Logged in as {}", username));
    Ok(())
}

/// Log out and discard the stored token
pub async fn logout() -> Result<()> {
    let config = load_config()?;
    let mut session = open_session(&config)?;

    session.logout();
    success("Logged out");

    Ok(())
}

/// Show session and configuration status
pub async fn status() -> Result<()> {
    let config = load_config()?;
    let session = open_session(&config)?;

    info(&format!("API: {}", config.api.base_url));

    if session.is_authenticated() {
        success("Authenticated (token present)");
    } else {
        info("Not authenticated. Run 'folio login <username>'");
    }

    info(&format!(
        "Assistant: {}",
        if config.assistant_enabled() { "enabled" } else { "disabled" }
    ));
    info(&format!(
        "Analytics: {}",
        if config.analytics_enabled() { "enabled" } else { "disabled" }
    ));

    Ok(())
}

/// List a collection through the view-state pipeline
pub async fn list(
    resource: Resource,
    category: &str,
    search: &str,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    let api = authed_api()?;
    let query = ListQuery {
        category: CategoryFilter::parse(category),
        search: search.to_string(),
        sort,
    };

    match resource {
        Resource::Users => list_collection(api.users(), &query, format).await,
        Resource::Skills => list_collection(api.skills(), &query, format).await,
        Resource::Certificates => list_collection(api.certificates(), &query, format).await,
        Resource::Experiences => list_collection(api.experiences(), &query, format).await,
        Resource::Education => list_collection(api.education(), &query, format).await,
    }
}

async fn list_collection<T>(
    client: ResourceClient<'_, T>,
    query: &ListQuery,
    format: OutputFormat,
) -> Result<()>
where
    T: Serialize + DeserializeOwned + ListEntry,
{
    let items = client.list().await?;
    let categories = pipeline::category_options(&items);
    let filtered = pipeline::apply(&items, query);

    match format {
        OutputFormat::Table => {
            print_entry_table(&filtered);
            print_categories(&categories);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&filtered)?);
        }
    }

    Ok(())
}

/// Show one entity as JSON
pub async fn show(resource: Resource, id: &str) -> Result<()> {
    let api = authed_api()?;

    let value = match resource {
        Resource::Users => serde_json::to_value(api.users().get(id).await?)?,
        Resource::Skills => serde_json::to_value(api.skills().get(id).await?)?,
        Resource::Certificates => serde_json::to_value(api.certificates().get(id).await?)?,
        Resource::Experiences => serde_json::to_value(api.experiences().get(id).await?)?,
        Resource::Education => serde_json::to_value(api.education().get(id).await?)?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Create an entity from a JSON payload
pub async fn create(resource: Resource, file: Option<PathBuf>) -> Result<()> {
    let api = authed_api()?;
    let payload = read_payload(file)?;

    let id = match resource {
        Resource::Users => create_one::<User, NewUser>(&api, resource, &payload).await?,
        Resource::Skills => create_one::<Skill, NewSkill>(&api, resource, &payload).await?,
        Resource::Certificates => {
            create_one::<Certificate, NewCertificate>(&api, resource, &payload).await?
        }
        Resource::Experiences => {
            create_one::<Experience, NewExperience>(&api, resource, &payload).await?
        }
        Resource::Education => {
            create_one::<Education, NewEducation>(&api, resource, &payload).await?
        }
    };

    success(&format!("Created {} {}", resource, id));
    Ok(())
}

/// Replace an entity from a JSON payload
pub async fn update(resource: Resource, id: &str, file: Option<PathBuf>) -> Result<()> {
    let api = authed_api()?;
    let payload = read_payload(file)?;

    match resource {
        Resource::Users => update_one::<User, NewUser>(&api, resource, id, &payload).await?,
        Resource::Skills => update_one::<Skill, NewSkill>(&api, resource, id, &payload).await?,
        Resource::Certificates => {
            update_one::<Certificate, NewCertificate>(&api, resource, id, &payload).await?
        }
        Resource::Experiences => {
            update_one::<Experience, NewExperience>(&api, resource, id, &payload).await?
        }
        Resource::Education => {
            update_one::<Education, NewEducation>(&api, resource, id, &payload).await?
        }
    }

    success(&format!("Updated {} {}", resource, id));
    Ok(())
}

/// Delete an entity
pub async fn delete(resource: Resource, id: &str, force: bool) -> Result<()> {
    if !force && !confirm(&format!("Delete {} {}?", resource, id)) {
        info("Aborted");
        return Ok(());
    }

    let api = authed_api()?;

    let remaining = match resource {
        Resource::Users => delete_and_recount(api.users(), id).await?,
        Resource::Skills => delete_and_recount(api.skills(), id).await?,
        Resource::Certificates => delete_and_recount(api.certificates(), id).await?,
        Resource::Experiences => delete_and_recount(api.experiences(), id).await?,
        Resource::Education => delete_and_recount(api.education(), id).await?,
    };

    success(&format!("Deleted {} {} ({} remaining)", resource, id, remaining));
    Ok(())
}

/// Delete, then re-fetch: the displayed state always reflects a completed
/// fetch, never an optimistic local patch.
async fn delete_and_recount<T>(client: ResourceClient<'_, T>, id: &str) -> Result<usize>
where
    T: DeserializeOwned,
{
    client.delete(id).await?;
    Ok(client.list().await?.len())
}

/// Show the normalized dashboard summary
pub async fn summary() -> Result<()> {
    let api = authed_api()?;
    let raw = api.summary_raw().await?;
    print_summary(&summary::normalize(&raw));
    Ok(())
}

/// Start the dashboard gateway server
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let config = load_config()?;
    info(&format!("Starting gateway on {}:{}", host, port));
    api::run_server(config, host, port).await?;
    Ok(())
}

// Helpers

fn load_config() -> Result<Config> {
    Ok(config::load_config()?)
}

fn open_session(config: &Config) -> Result<Session> {
    let path = match &config.auth.token_path {
        Some(path) => path.clone(),
        None => FileTokenStore::default_path()?,
    };
    Ok(Session::new(config, Box::new(FileTokenStore::new(path)))?)
}

fn authed_api() -> Result<ApiClient> {
    let config = load_config()?;
    let session = open_session(&config)?;
    Ok(session.api_client())
}

fn read_payload(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

async fn create_one<T, I>(api: &ApiClient, resource: Resource, payload: &str) -> Result<String>
where
    T: Serialize + DeserializeOwned,
    I: DeserializeOwned + Serialize + Validate,
{
    let input: I = serde_json::from_str(payload)?;
    let created = ResourceClient::<T>::new(api, resource.path())
        .create(&input)
        .await?;
    let value = serde_json::to_value(&created)?;
    Ok(value
        .get("id")
        .and_then(|id| id.as_str())
        .unwrap_or("?")
        .to_string())
}

async fn update_one<T, I>(api: &ApiClient, resource: Resource, id: &str, payload: &str) -> Result<()>
where
    T: Serialize + DeserializeOwned,
    I: DeserializeOwned + Serialize + Validate,
{
    let input: I = serde_json::from_str(payload)?;
    ResourceClient::<T>::new(api, resource.path())
        .update(id, &input)
        .await?;
    Ok(())
}
