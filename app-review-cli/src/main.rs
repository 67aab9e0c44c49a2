//! App review command-line tool
//!
//! Usage:
//!   app-review lookup com.example.app --country us
//!   app-review url 123456789 --write-review
//!   app-review url com.example.app --play
//!   app-review tier --platform ios --os-version 16.4

use anyhow::Result;
use app_review_cli::{run, Cli};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let output = run(cli.command).await?;
    println!("{output}");
    Ok(())
}
