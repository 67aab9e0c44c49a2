//! URL opening host service.

use app_review_core::Url;
use async_trait::async_trait;
use std::sync::Arc;

/// Hands a URL to the platform's handler (browser or store app).
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Returns whether the platform accepted the URL.
    async fn open_url(&self, url: &Url) -> bool;
}

/// Opener for targets without a URL handler. Reports every URL as opened.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUrlOpener;

#[async_trait]
impl UrlOpener for NoopUrlOpener {
    async fn open_url(&self, _url: &Url) -> bool {
        true
    }
}

#[async_trait]
impl<T: UrlOpener + ?Sized> UrlOpener for Arc<T> {
    async fn open_url(&self, url: &Url) -> bool {
        (**self).open_url(url).await
    }
}
