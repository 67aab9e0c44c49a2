//! Lookup client configuration.

use serde::{Deserialize, Serialize};

/// Public app directory endpoint.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://itunes.apple.com";

/// Configuration for [`crate::LookupClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the directory service (e.g. `https://itunes.apple.com`).
    pub base_url: String,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with lookups.
    pub user_agent: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl LookupConfig {
    /// Config pointing at a different directory host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
