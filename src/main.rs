use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use macrodump::{
    execute_export, execute_fetch, execute_normalize, execute_project, FetchConfig, MergePolicy,
    NormalizeConfig, ProjectConfig, ZendeskClient, ZendeskConfig, DEFAULT_ENDPOINT,
};

#[derive(Parser)]
#[command(name = "macrodump")]
#[command(author, version, about = "Export all Zendesk macros to a plain-text CSV", long_about = None)]
struct Cli {
    /// Zendesk account email used for authentication
    user: String,

    /// API token paired with the account
    token: String,

    /// Output CSV file
    #[arg(default_value = "macros_principal.csv")]
    output: PathBuf,

    /// Macros endpoint to start pagination from
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// How to resolve two actions writing the same column
    #[arg(long, value_enum, default_value_t = MergePolicy::LastWins)]
    merge_policy: MergePolicy,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = ZendeskConfig::new(cli.user, cli.token).with_endpoint(cli.endpoint);
    let client = ZendeskClient::new(config);

    // Stage 0: Fetch every page
    info!("Fetching macros from {}", client.endpoint());
    let fetch_config = FetchConfig {
        endpoint: client.endpoint().to_string(),
    };
    let fetched = execute_fetch(&client, &fetch_config).await?;
    info!(
        "Fetched {} pages ({} macros, {} requests)",
        fetched.pages.len(),
        fetched.total_macros(),
        fetched.requests
    );

    // Stages 1 & 2: Project and normalize, page by page
    let project_config = ProjectConfig {
        merge_policy: cli.merge_policy,
    };
    let normalize_config = NormalizeConfig::default();

    let mut page_tables = Vec::with_capacity(fetched.pages.len());
    let mut dropped_missing_title = 0;
    let mut placeholders = 0;

    for page in &fetched.pages {
        let projected = execute_project(&page.macros, &project_config)?;
        dropped_missing_title += projected.dropped_missing_title;

        let mut rows = projected.rows;
        let normalized = execute_normalize(&mut rows, &normalize_config);
        placeholders += normalized.placeholders;

        page_tables.push(rows);
    }

    if dropped_missing_title > 0 {
        info!("Dropped {} macros without a title", dropped_missing_title);
    }

    // Stage 3: Export
    let exported = execute_export(page_tables, &cli.output)?;

    info!(
        "Complete: {} rows, {} columns, {} placeholder cells, written to {:?}",
        exported.rows_written,
        exported.columns.len(),
        placeholders,
        exported.path
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
