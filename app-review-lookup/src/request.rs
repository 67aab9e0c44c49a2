//! Lookup request and result values.

use app_review_core::{ReviewError, ReviewResult, Url};
use serde::{Deserialize, Serialize};

/// A directory lookup for one bundle identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub bundle_id: String,
    /// Storefront country. `None` or empty uses the directory's default locale.
    pub country_code: Option<String>,
}

impl LookupRequest {
    pub fn new(bundle_id: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            country_code: None,
        }
    }

    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Builds `{base_url}/{country}/lookup?bundleId={bundle_id}`.
    ///
    /// The country segment is inserted verbatim and omitted when empty. The
    /// bundle identifier is percent-encoded.
    pub fn lookup_url(&self, base_url: &str) -> ReviewResult<Url> {
        if self.bundle_id.trim().is_empty() {
            return Err(ReviewError::InvalidRequest("bundle ID is empty".to_string()));
        }

        let base = base_url.trim_end_matches('/');
        let country = self.country_code.as_deref().unwrap_or("");
        if country
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(ReviewError::InvalidRequest(format!(
                "country code cannot be used in a URL path: {country:?}"
            )));
        }

        let bundle_id = urlencoding::encode(&self.bundle_id);
        let text = if country.is_empty() {
            format!("{base}/lookup?bundleId={bundle_id}")
        } else {
            format!("{base}/{country}/lookup?bundleId={bundle_id}")
        };

        let url = Url::parse(&text)
            .map_err(|e| ReviewError::InvalidRequest(format!("invalid lookup URL {text}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ReviewError::InvalidRequest(format!(
                "lookup URL must be http(s): {text}"
            )));
        }
        Ok(url)
    }
}

/// Store identifier found by a lookup.
///
/// An empty result means the directory had no match. It is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    store_id: Option<String>,
}

impl LookupResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result for a numeric `trackId`, rendered in decimal.
    pub fn found(track_id: i64) -> Self {
        Self {
            store_id: Some(track_id.to_string()),
        }
    }

    pub fn store_id(&self) -> Option<&str> {
        self.store_id.as_deref()
    }

    pub fn into_store_id(self) -> Option<String> {
        self.store_id
    }

    pub fn is_empty(&self) -> bool {
        self.store_id.is_none()
    }
}
