//! Argument model and command handlers for the `app-review` tool.
//!
//! Handlers return the text to print so they can be driven from tests
//! without capturing stdout.

use anyhow::{Context, Result};
use app_review_core::{
    build_listing_url, build_play_market_url, build_play_web_url, build_write_review_url,
    NoopReviewPlatform, Platform, PlatformVersion, ReviewCapabilityTier, ReviewStrategySelector,
};
use app_review_lookup::{LookupClient, LookupConfig, LookupRequest, DEFAULT_LOOKUP_BASE_URL};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "app-review")]
#[command(about = "Store ID lookup, store URLs and review capability tiers")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve the numeric store ID for a bundle identifier
    Lookup {
        bundle_id: String,

        /// Two-letter store region, e.g. "us"
        #[arg(short, long)]
        country: Option<String>,

        /// Lookup endpoint base URL
        #[arg(long, env = "APP_REVIEW_LOOKUP_URL", default_value = DEFAULT_LOOKUP_BASE_URL)]
        base_url: String,

        /// Request timeout in seconds
        #[arg(long, env = "APP_REVIEW_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,
    },

    /// Print the store URL for an app
    Url {
        /// Numeric App Store ID, or package name with --play
        id: String,

        /// Link to the write-review page instead of the listing
        #[arg(short, long, conflicts_with = "play")]
        write_review: bool,

        /// Print Play Store URLs (market and web) for a package name
        #[arg(long)]
        play: bool,
    },

    /// Show the review capability tier for a platform version
    Tier {
        /// ios or macos
        #[arg(short, long)]
        platform: Platform,

        /// OS version, e.g. 16.4
        #[arg(long)]
        os_version: PlatformVersion,

        /// Also run the selected strategy against a headless host
        #[arg(long)]
        request: bool,
    },
}

/// Runs a parsed command and returns its output.
pub async fn run(command: Command) -> Result<String> {
    match command {
        Command::Lookup {
            bundle_id,
            country,
            base_url,
            timeout_secs,
        } => {
            let config = LookupConfig {
                timeout_secs,
                ..LookupConfig::with_base_url(base_url)
            };
            lookup(config, &bundle_id, country.as_deref()).await
        }
        Command::Url {
            id,
            write_review,
            play,
        } => store_urls(&id, write_review, play),
        Command::Tier {
            platform,
            os_version,
            request,
        } => Ok(tier_report(platform, os_version, request)),
    }
}

pub async fn lookup(config: LookupConfig, bundle_id: &str, country: Option<&str>) -> Result<String> {
    let client = LookupClient::new(config).context("Failed to create lookup client")?;
    let mut request = LookupRequest::new(bundle_id);
    if let Some(country) = country {
        request = request.with_country(country);
    }

    let result = client
        .lookup_app_id(&request)
        .await
        .with_context(|| format!("Lookup failed for {bundle_id}"))?;

    match result.into_store_id() {
        Some(id) => {
            info!("Resolved {} to store ID {}", bundle_id, id);
            Ok(id)
        }
        None => Ok(format!("No store entry for {bundle_id}")),
    }
}

pub fn store_urls(id: &str, write_review: bool, play: bool) -> Result<String> {
    if play {
        let market = build_play_market_url(id).context("Invalid package name")?;
        let web = build_play_web_url(id).context("Invalid package name")?;
        return Ok(format!("{market}\n{web}"));
    }

    let url = if write_review {
        build_write_review_url(id)
    } else {
        build_listing_url(id)
    }
    .context("Invalid store ID")?;
    Ok(url.to_string())
}

pub fn tier_report(platform: Platform, version: PlatformVersion, request: bool) -> String {
    let tier = ReviewCapabilityTier::for_platform(platform, version);
    debug!("{} {} maps to tier {}", platform, version, tier);

    let mut out = format!(
        "platform:  {platform}\nversion:   {version}\ntier:      {tier}\navailable: {}",
        tier.is_available()
    );
    if request {
        let selector = ReviewStrategySelector::new(platform, version, Arc::new(NoopReviewPlatform));
        let outcome = selector.request_review();
        out.push_str(&format!("\noutcome:   {}", outcome.message()));
    }
    out
}
