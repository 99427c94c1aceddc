mod export;
mod params;
mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweetpipe_core::AppConfig;
use tweetpipe_search::{fetch, Session, SessionOptions};
use tweetpipe_sentiment::SentimentBreakdown;

use crate::params::RunParams;

#[derive(Debug, Parser)]
#[command(name = "tweetpipe")]
#[command(about = "Fetch posts matching a search term, export them, and summarize sentiment")]
struct Cli {
    /// Search term, target count, and retweet exclusion (non-zero excludes).
    /// Give all three or none.
    #[arg(value_name = "TERM COUNT EXCLUDE", allow_hyphen_values = true)]
    params: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parsed before config so `--help` works with a broken environment.
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tweetpipe_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = RunParams::resolve(&cli.params);
    run(&config, &params).await
}

/// Fetches, exports, and reports on one search.
async fn run(config: &AppConfig, params: &RunParams) -> anyhow::Result<()> {
    let credentials = tweetpipe_core::load_credentials(config)?;
    let session = Session::authenticate(credentials, SessionOptions::from_app_config(config))
        .await
        .map_err(|e| anyhow::anyhow!("failed to open search session: {e}"))?;

    let records = fetch(
        &session,
        &params.search_term,
        params.target_count,
        params.exclude_retweets,
    )
    .await
    .map_err(|e| anyhow::anyhow!("search for '{}' failed: {e}", params.search_term))?;

    if records.len() < params.target_count {
        tracing::warn!(
            requested = params.target_count,
            fetched = records.len(),
            "source ran out of results before the requested count"
        );
    }

    let paths = export::export_records(&records, &config.output_dir, &params.search_term)?;
    println!("wrote {} and {}", paths.csv.display(), paths.json.display());

    let breakdown = SentimentBreakdown::from_texts(records.iter().map(|r| r.text.as_str()));
    println!();
    for line in report::sentiment_lines(&breakdown) {
        println!("{line}");
    }

    let rows = report::sort_for_display(&records);
    println!();
    println!("{}", report::build_table(&rows, config.table_rows));

    Ok(())
}
