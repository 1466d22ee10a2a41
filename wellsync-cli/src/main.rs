//! Wellsync CLI
//!
//! Command-line administration for Wellsync content documents.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;
use wellsync_core::DomainKind;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "wellsync")]
#[command(version, about = "Localized wellness content administration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content directory (default: <data dir>/wellsync/content)
    #[arg(long, global = true, env = "WELLSYNC_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Language for displayed text (e.g., "ru", "en-US")
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Fallback language when a text has no requested variant
    #[arg(long, global = true, env = "WELLSYNC_DEFAULT_LANGUAGE")]
    default_language: Option<String>,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items of a content domain
    List {
        /// Content domain (programs, mood-types, onboarding-questions, ...)
        #[arg(value_parser = parse_domain)]
        domain: DomainKind,

        /// Only items in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one item
    Show {
        /// Content domain
        #[arg(value_parser = parse_domain)]
        domain: DomainKind,

        /// Item id
        id: String,
    },

    /// Search names, descriptions and categories
    Search {
        /// Content domain
        #[arg(value_parser = parse_domain)]
        domain: DomainKind,

        /// Search query (case-insensitive)
        query: String,
    },

    /// Show aggregate statistics of a domain
    Stats {
        /// Content domain
        #[arg(value_parser = parse_domain)]
        domain: DomainKind,
    },

    /// Load every domain and show its sync status
    Status,

    /// Replace a domain's document with the contents of a JSON file
    Update {
        /// Content domain
        #[arg(value_parser = parse_domain)]
        domain: DomainKind,

        /// JSON file with the new document
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_domain(value: &str) -> Result<DomainKind, String> {
    value.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wellsync_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Resolve content directory
    let content_dir = cli.content_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellsync")
            .join("content")
    });

    let config = CliConfig {
        content_dir,
        language: cli.lang,
        default_language: cli.default_language,
        json: cli.json,
    };

    match cli.command {
        Commands::List { domain, category } => {
            commands::browse::list(&config, domain, category.as_deref()).await?;
        }
        Commands::Show { domain, id } => commands::browse::show(&config, domain, &id).await?,
        Commands::Search { domain, query } => {
            commands::browse::search(&config, domain, &query).await?;
        }
        Commands::Stats { domain } => commands::browse::stats(&config, domain).await?,
        Commands::Status => commands::status::run(&config).await?,
        Commands::Update { domain, file } => {
            commands::update::run(&config, domain, &file).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "wellsync", &mut io::stdout());
        }
    }

    Ok(())
}
