//! Boundary operations exposed to the host application.

use app_review_core::ReviewResult;
use async_trait::async_trait;

/// App review operations callable from application code.
///
/// Errors are returned as values; nothing panics across this boundary.
#[async_trait]
pub trait AppReviewApi: Send + Sync {
    /// Asks the platform for a review prompt and returns a status message.
    ///
    /// `test_mode` selects a fake review flow where the platform has one.
    async fn request_review(&self, test_mode: bool) -> ReviewResult<Option<String>>;

    /// Returns whether this platform can show a review prompt.
    async fn is_request_review_available(&self) -> ReviewResult<bool>;

    /// Returns the bundle identifier (package name on Android).
    async fn bundle_id(&self) -> ReviewResult<String>;

    /// Opens the store listing for `store_id`.
    async fn open_store_listing(&self, store_id: Option<&str>) -> ReviewResult<()>;

    /// Opens the store's write-review page for `store_id`.
    async fn open_app_store_review(&self, store_id: Option<&str>) -> ReviewResult<()>;

    /// Resolves the numeric store ID for a bundle identifier.
    async fn lookup_app_id(
        &self,
        bundle_id: &str,
        country_code: Option<&str>,
    ) -> ReviewResult<Option<String>>;
}
