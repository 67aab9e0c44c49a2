//! App review for Android and the Play Store.
//!
//! The Play in-app review API is a two-step flow: request a review token,
//! then launch the flow with it. A token requested by an availability check
//! is cached and consumed by the next launch.

use crate::api::AppReviewApi;
use crate::opener::UrlOpener;
use app_review_core::{build_play_market_url, build_play_web_url, ReviewError, ReviewResult};
use app_review_lookup::{LookupClient, LookupConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Play platform configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReviewConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Opaque token for one review flow launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInfo(String);

impl ReviewInfo {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Play in-app review manager.
#[async_trait]
pub trait ReviewManager: Send + Sync {
    /// Requests a token for a review flow.
    async fn request_review_flow(&self) -> ReviewResult<ReviewInfo>;

    /// Launches the review flow. Returns whether the flow completed; this does
    /// not say whether a prompt was shown.
    async fn launch_review_flow(&self, info: ReviewInfo) -> bool;
}

#[async_trait]
impl<T: ReviewManager + ?Sized> ReviewManager for Arc<T> {
    async fn request_review_flow(&self) -> ReviewResult<ReviewInfo> {
        (**self).request_review_flow().await
    }

    async fn launch_review_flow(&self, info: ReviewInfo) -> bool {
        (**self).launch_review_flow(info).await
    }
}

/// Review manager that always succeeds without showing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeReviewManager;

#[async_trait]
impl ReviewManager for FakeReviewManager {
    async fn request_review_flow(&self) -> ReviewResult<ReviewInfo> {
        Ok(ReviewInfo::new("fake-review-info"))
    }

    async fn launch_review_flow(&self, _info: ReviewInfo) -> bool {
        true
    }
}

/// The Android activity the API is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBinding {
    pub package_name: String,
}

#[derive(Debug)]
struct CachedReviewInfo {
    test_mode: bool,
    info: ReviewInfo,
}

const ACTIVITY_UNAVAILABLE: &str = "Android activity not available";

/// App review backed by the Play in-app review API and the Play Store.
pub struct PlayAppReview<M: ReviewManager, O: UrlOpener> {
    manager: M,
    fake_manager: FakeReviewManager,
    opener: O,
    lookup: LookupClient,
    activity: RwLock<Option<ActivityBinding>>,
    review_info: Mutex<Option<CachedReviewInfo>>,
}

impl<M: ReviewManager, O: UrlOpener> PlayAppReview<M, O> {
    /// Creates a detached Play review API.
    pub fn new(config: PlayReviewConfig, manager: M, opener: O) -> ReviewResult<Self> {
        Ok(Self {
            manager,
            fake_manager: FakeReviewManager,
            opener,
            lookup: LookupClient::new(config.lookup)?,
            activity: RwLock::new(None),
            review_info: Mutex::new(None),
        })
    }

    /// Binds the API to a foreground activity.
    pub async fn attach_activity(&self, package_name: impl Into<String>) {
        let binding = ActivityBinding {
            package_name: package_name.into(),
        };
        info!("Attached to activity {}", binding.package_name);
        *self.activity.write().await = Some(binding);
    }

    /// Drops the activity binding and any cached review token.
    pub async fn detach_activity(&self) {
        *self.activity.write().await = None;
        *self.review_info.lock().await = None;
        debug!("Detached from activity");
    }

    pub async fn is_attached(&self) -> bool {
        self.activity.read().await.is_some()
    }

    async fn require_activity(&self) -> ReviewResult<ActivityBinding> {
        self.activity
            .read()
            .await
            .clone()
            .ok_or_else(|| ReviewError::HostUnavailable(ACTIVITY_UNAVAILABLE.to_string()))
    }

    fn manager(&self, test_mode: bool) -> &dyn ReviewManager {
        if test_mode {
            &self.fake_manager
        } else {
            &self.manager
        }
    }

    /// Takes the cached token if it came from the same manager.
    async fn take_review_info(&self, test_mode: bool) -> Option<ReviewInfo> {
        let mut cached = self.review_info.lock().await;
        match cached.take() {
            Some(entry) if entry.test_mode == test_mode => Some(entry.info),
            _ => None,
        }
    }

    async fn open_listing(&self, store_id: Option<&str>) -> ReviewResult<()> {
        let activity = self.require_activity().await?;
        let package = store_id.unwrap_or(activity.package_name.as_str());

        let market = build_play_market_url(package)?;
        if self.opener.open_url(&market).await {
            return Ok(());
        }

        debug!("No handler for {}, falling back to web listing", market);
        let web = build_play_web_url(package)?;
        if self.opener.open_url(&web).await {
            return Ok(());
        }

        warn!("Could not open Play listing for {package}");
        Err(ReviewError::OpenFailed("Failed to open store listing".to_string()))
    }
}

#[async_trait]
impl<M: ReviewManager, O: UrlOpener> AppReviewApi for PlayAppReview<M, O> {
    async fn request_review(&self, test_mode: bool) -> ReviewResult<Option<String>> {
        self.require_activity().await?;
        let manager = self.manager(test_mode);

        let info = match self.take_review_info(test_mode).await {
            Some(info) => info,
            None => manager.request_review_flow().await.map_err(|e| {
                warn!("Review flow request failed: {e}");
                ReviewError::ReviewFlowUnavailable("Requesting review not possible".to_string())
            })?,
        };

        let launched = manager.launch_review_flow(info).await;
        info!("Review flow finished, success: {launched}");
        Ok(Some(format!("Success: {launched}")))
    }

    async fn is_request_review_available(&self) -> ReviewResult<bool> {
        self.require_activity().await?;
        match self.manager.request_review_flow().await {
            Ok(info) => {
                *self.review_info.lock().await = Some(CachedReviewInfo {
                    test_mode: false,
                    info,
                });
                Ok(true)
            }
            Err(e) => {
                debug!("Review flow not available: {e}");
                Ok(false)
            }
        }
    }

    async fn bundle_id(&self) -> ReviewResult<String> {
        Ok(self.require_activity().await?.package_name)
    }

    async fn open_store_listing(&self, store_id: Option<&str>) -> ReviewResult<()> {
        self.open_listing(store_id).await
    }

    async fn open_app_store_review(&self, store_id: Option<&str>) -> ReviewResult<()> {
        self.open_listing(store_id).await
    }

    async fn lookup_app_id(
        &self,
        bundle_id: &str,
        country_code: Option<&str>,
    ) -> ReviewResult<Option<String>> {
        self.lookup.lookup(bundle_id, country_code).await
    }
}
