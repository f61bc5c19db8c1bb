use anyhow::Context;
use clap::Parser;
use nba_player_summary::config::LoggingConfig;
use nba_player_summary::{summarize_player, AppConfig, NbaStatsClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nba-player-summary")]
#[command(about = "Print an NBA player's career totals and awards as one line of JSON")]
struct Cli {
    /// Player's full name, matched exactly (e.g. "Tim Duncan")
    player_name: String,
}

// stdout carries only the summary, so logs go to stderr
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging);

    let client = NbaStatsClient::new(config.provider).context("failed to build HTTP client")?;

    let summary = summarize_player(&client, &cli.player_name)
        .await
        .with_context(|| format!("failed to summarize {:?}", cli.player_name))?;

    println!("{}", summary.to_json()?);

    Ok(())
}
