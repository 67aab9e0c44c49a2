//! HTTP client for the app directory lookup endpoint.

use crate::config::LookupConfig;
use crate::parse::parse_lookup_body;
use crate::request::{LookupRequest, LookupResult};
use app_review_core::{ReviewError, ReviewResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolves store identifiers from bundle identifiers.
///
/// Each lookup is a single GET with no retries. The client holds no state
/// besides its connection pool, so clones can be used concurrently.
#[derive(Debug, Clone)]
pub struct LookupClient {
    config: LookupConfig,
    client: Client,
}

impl LookupClient {
    /// Creates a lookup client.
    pub fn new(config: LookupConfig) -> ReviewResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| ReviewError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Looks up the store ID for `request.bundle_id`.
    ///
    /// Returns an empty result when the directory has no usable match,
    /// [`ReviewError::Network`] when the transport fails, and
    /// [`ReviewError::Parse`] when the body is not JSON. The HTTP status is
    /// not an error by itself: the body is parsed whatever the status.
    pub async fn lookup_app_id(&self, request: &LookupRequest) -> ReviewResult<LookupResult> {
        let url = request.lookup_url(&self.config.base_url)?;
        debug!("Looking up store ID: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Lookup request for {} failed: {e}", request.bundle_id);
            ReviewError::Network(format!("lookup request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                "Lookup for {} returned HTTP {status}, parsing body anyway",
                request.bundle_id
            );
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ReviewError::Network(format!("failed to read lookup response: {e}")))?;

        let result = parse_lookup_body(&body)?;
        match result.store_id() {
            Some(id) => info!("Resolved {} to store ID {id}", request.bundle_id),
            None => info!("No store listing found for {}", request.bundle_id),
        }
        Ok(result)
    }

    /// Convenience wrapper taking the host's primitive arguments.
    pub async fn lookup(
        &self,
        bundle_id: &str,
        country_code: Option<&str>,
    ) -> ReviewResult<Option<String>> {
        let mut request = LookupRequest::new(bundle_id);
        request.country_code = country_code.map(str::to_string);
        Ok(self.lookup_app_id(&request).await?.into_store_id())
    }
}
