use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { username, password } => cli::commands::login(&username, password).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Status => cli::commands::status().await,
        Commands::List {
            resource,
            category,
            search,
            sort,
            format,
        } => cli::commands::list(resource, &category, &search, sort, format).await,
        Commands::Show { resource, id } => cli::commands::show(resource, &id).await,
        Commands::Create { resource, file } => cli::commands::create(resource, file).await,
        Commands::Update { resource, id, file } => {
            cli::commands::update(resource, &id, file).await
        }
        Commands::Delete { resource, id, force } => {
            cli::commands::delete(resource, &id, force).await
        }
        Commands::Summary => cli::commands::summary().await,
        Commands::Serve { host, port } => cli::commands::serve(&host, port).await,
    }
}
