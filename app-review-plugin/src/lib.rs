//! Host-facing app review API.
//!
//! [`AppReviewApi`] is the surface the application calls into. Two
//! implementations exist:
//! - [`AppleAppReview`]: tiered review prompts on iOS/macOS, App Store URLs
//! - [`PlayAppReview`]: Play in-app review flow, Play Store URLs
//!
//! Opening a URL is delegated to a [`UrlOpener`] supplied by the host.

mod api;
mod apple;
mod opener;
mod play;

pub use api::AppReviewApi;
pub use apple::{AppleAppReview, AppleReviewConfig};
pub use opener::{NoopUrlOpener, UrlOpener};
pub use play::{
    ActivityBinding, FakeReviewManager, PlayAppReview, PlayReviewConfig, ReviewInfo,
    ReviewManager,
};
