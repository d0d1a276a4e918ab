//! CLI interface for Folio

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::SortOrder;
use crate::portfolio::Resource;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Manage portfolio content from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new folio.toml configuration file
    Init,

    /// Log in to the portfolio API and store the bearer token
    Login {
        /// Username
        username: String,

        /// Password (prompts if not provided)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and discard the stored token
    Logout,

    /// Show session and configuration status
    Status,

    /// List a collection with the filter/search/sort pipeline applied
    List {
        /// Collection to list
        resource: Resource,

        /// Category filter ("all" disables it)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrder::Newest)]
        sort: SortOrder,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one entity as JSON
    Show {
        resource: Resource,
        id: String,
    },

    /// Create an entity from a JSON payload (stdin or --file)
    Create {
        resource: Resource,

        /// Read the payload from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Replace an entity from a JSON payload (stdin or --file)
    Update {
        resource: Resource,
        id: String,

        /// Read the payload from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete an entity
    Delete {
        resource: Resource,
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Show the normalized dashboard summary
    Summary,

    /// Start the dashboard gateway server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
