//! App review for iOS and macOS.

use crate::api::AppReviewApi;
use crate::opener::UrlOpener;
use app_review_core::{
    build_store_url, Platform, PlatformVersion, ReviewError, ReviewPlatform, ReviewResult,
    ReviewStrategySelector, StoreUrlKind, TokioDispatcher, UiDispatcher,
};
use app_review_lookup::{LookupClient, LookupConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Apple platform configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppleReviewConfig {
    pub platform: Platform,
    pub os_version: PlatformVersion,
    /// Main bundle identifier, if the host knows it.
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl AppleReviewConfig {
    pub fn new(platform: Platform, os_version: PlatformVersion) -> Self {
        Self {
            platform,
            os_version,
            bundle_id: None,
            lookup: LookupConfig::default(),
        }
    }
}

/// App review backed by StoreKit-style review APIs and the App Store.
pub struct AppleAppReview<O: UrlOpener> {
    config: AppleReviewConfig,
    selector: ReviewStrategySelector,
    opener: O,
    lookup: LookupClient,
}

impl<O: UrlOpener> AppleAppReview<O> {
    /// Creates the Apple review API. The review tier is fixed from
    /// `config.platform` and `config.os_version`.
    ///
    /// Reactive-tier UI work is spawned on the caller's tokio runtime, so
    /// `request_review` returns before it runs. Outside a runtime it runs
    /// inline. Use [`AppleAppReview::with_dispatcher`] to hand it to the
    /// host's UI context instead.
    pub fn new(
        config: AppleReviewConfig,
        platform: Arc<dyn ReviewPlatform>,
        opener: O,
    ) -> ReviewResult<Self> {
        let mut selector =
            ReviewStrategySelector::new(config.platform, config.os_version, platform);
        if let Some(dispatcher) = TokioDispatcher::try_current() {
            selector = selector.with_dispatcher(Arc::new(dispatcher));
        }
        let lookup = LookupClient::new(config.lookup.clone())?;
        debug!(
            "Apple app review on {} {} uses tier {}",
            config.platform,
            config.os_version,
            selector.tier()
        );
        Ok(Self {
            config,
            selector,
            opener,
            lookup,
        })
    }

    /// Runs reactive-tier UI work through `dispatcher`.
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn UiDispatcher>) -> Self {
        self.selector = self.selector.with_dispatcher(dispatcher);
        self
    }

    pub fn selector(&self) -> &ReviewStrategySelector {
        &self.selector
    }

    async fn open_store_url(
        &self,
        store_id: Option<&str>,
        kind: StoreUrlKind,
        failure: &str,
    ) -> ReviewResult<()> {
        let store_id = store_id.ok_or(ReviewError::MissingIdentifier)?;
        let url = build_store_url(store_id, kind)?;

        if self.opener.open_url(&url).await {
            debug!("Opened {}", url);
            Ok(())
        } else {
            warn!("Platform refused to open {}", url);
            Err(ReviewError::OpenFailed(failure.to_string()))
        }
    }
}

#[async_trait]
impl<O: UrlOpener> AppReviewApi for AppleAppReview<O> {
    async fn request_review(&self, _test_mode: bool) -> ReviewResult<Option<String>> {
        let outcome = self.selector.request_review();
        Ok(Some(outcome.message().to_string()))
    }

    async fn is_request_review_available(&self) -> ReviewResult<bool> {
        Ok(self.selector.is_request_review_available())
    }

    async fn bundle_id(&self) -> ReviewResult<String> {
        Ok(self.config.bundle_id.clone().unwrap_or_default())
    }

    async fn open_store_listing(&self, store_id: Option<&str>) -> ReviewResult<()> {
        self.open_store_url(store_id, StoreUrlKind::Listing, "Failed to open store listing")
            .await
    }

    async fn open_app_store_review(&self, store_id: Option<&str>) -> ReviewResult<()> {
        self.open_store_url(
            store_id,
            StoreUrlKind::WriteReview,
            "Failed to open App Store review",
        )
        .await
    }

    async fn lookup_app_id(
        &self,
        bundle_id: &str,
        country_code: Option<&str>,
    ) -> ReviewResult<Option<String>> {
        self.lookup.lookup(bundle_id, country_code).await
    }
}
