//! Store listing and write-review URL builders.
//!
//! Builders are pure. A URL is only returned if the text formed from the
//! identifier parses and serializes back unchanged, so identifiers that would
//! need escaping or would restructure the URL are rejected.

use crate::error::{ReviewError, ReviewResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// App Store listing prefix; the numeric store ID is appended.
pub const APP_STORE_LISTING_PREFIX: &str = "https://apps.apple.com/app/id";

/// Query suffix that opens the write-review sheet of a listing.
pub const WRITE_REVIEW_QUERY: &str = "action=write-review";

/// Play Store app deep link prefix; the package name is appended.
pub const PLAY_MARKET_PREFIX: &str = "market://details?id=";

/// Play Store web listing prefix; the package name is appended.
pub const PLAY_WEB_PREFIX: &str = "https://play.google.com/store/apps/details?id=";

/// Which store page to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreUrlKind {
    Listing,
    WriteReview,
}

/// Builds an App Store URL of the given kind.
pub fn build_store_url(store_id: &str, kind: StoreUrlKind) -> ReviewResult<Url> {
    let store_id = require_identifier(store_id)?;
    let text = match kind {
        StoreUrlKind::Listing => format!("{APP_STORE_LISTING_PREFIX}{store_id}"),
        StoreUrlKind::WriteReview => {
            format!("{APP_STORE_LISTING_PREFIX}{store_id}?{WRITE_REVIEW_QUERY}")
        }
    };
    parse_exact(&text)
}

/// `https://apps.apple.com/app/id{store_id}`
pub fn build_listing_url(store_id: &str) -> ReviewResult<Url> {
    build_store_url(store_id, StoreUrlKind::Listing)
}

/// `https://apps.apple.com/app/id{store_id}?action=write-review`
pub fn build_write_review_url(store_id: &str) -> ReviewResult<Url> {
    build_store_url(store_id, StoreUrlKind::WriteReview)
}

/// `market://details?id={package}`
pub fn build_play_market_url(package: &str) -> ReviewResult<Url> {
    let package = require_identifier(package)?;
    parse_exact(&format!("{PLAY_MARKET_PREFIX}{package}"))
}

/// `https://play.google.com/store/apps/details?id={package}`
pub fn build_play_web_url(package: &str) -> ReviewResult<Url> {
    let package = require_identifier(package)?;
    parse_exact(&format!("{PLAY_WEB_PREFIX}{package}"))
}

fn require_identifier(id: &str) -> ReviewResult<&str> {
    if id.trim().is_empty() {
        return Err(ReviewError::MissingIdentifier);
    }
    Ok(id)
}

fn parse_exact(text: &str) -> ReviewResult<Url> {
    let url = Url::parse(text).map_err(|e| ReviewError::InvalidUrl(format!("{text}: {e}")))?;
    if url.as_str() != text {
        return Err(ReviewError::InvalidUrl(format!(
            "{text}: normalizes to {}",
            url.as_str()
        )));
    }
    Ok(url)
}
