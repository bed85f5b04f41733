mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use page_analyzer_core::AppConfig;
use page_analyzer_fetch::PageFetcher;
use page_analyzer_service::{CheckService, UrlService};
use page_analyzer_storage::PgStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "page-analyzer")]
#[command(about = "Track websites and record their SEO metadata over time", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Overrides PAGE_ANALYZER_PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides PAGE_ANALYZER_HOST
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Start tracking a URL
    Add { url: String },
    /// Fetch a tracked URL and record a check
    Check { id: i64 },
    /// List tracked URLs with their latest check
    List,
    /// Show one tracked URL and its check history
    Show { id: i64 },
    /// Create the database schema and exit
    Migrate,
}

/// Services wired over a single PostgreSQL pool.
pub(crate) struct Services {
    pub(crate) urls: UrlService,
    pub(crate) checks: CheckService,
}

pub(crate) fn load_config() -> Result<AppConfig> {
    Ok(AppConfig::from_env()?)
}

pub(crate) async fn connect(config: &AppConfig) -> Result<Arc<PgStorage>> {
    let storage = PgStorage::new(&config.database_url, config.pg_max_connections).await?;
    Ok(Arc::new(storage))
}

pub(crate) async fn build_services(config: &AppConfig) -> Result<Services> {
    let storage = connect(config).await?;
    let fetcher = Arc::new(PageFetcher::new(&config.fetch)?);
    Ok(Services {
        urls: UrlService::new(storage.clone()),
        checks: CheckService::new(storage, fetcher),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the JSON printed by the one-shot commands stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Add { url } => commands::urls::add(&url).await,
        Commands::Check { id } => commands::check::run(id).await,
        Commands::List => commands::urls::list().await,
        Commands::Show { id } => commands::urls::show(id).await,
        Commands::Migrate => commands::migrate::run().await,
    }
}
