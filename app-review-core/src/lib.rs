//! Core of the app review services.
//!
//! This crate handles:
//! - Mapping a platform version to a review capability tier
//! - Running the selected review strategy against the host platform
//! - Building App Store and Play Store listing URLs
//! - The error type shared by the lookup client and host facades
//!
//! # Design Principles
//!
//! - **Tier as data**: the tier is computed once and stored, so selection is
//!   testable without a real OS
//! - **Best effort prompts**: review requests never fail; an old platform
//!   yields a "not available" outcome
//! - **Scoped UI side effects**: the transient review view is always detached
//! - **Pure builders**: URL construction never performs I/O

mod dispatch;
mod error;
mod host;
mod platform;
mod selector;
mod store_url;
mod tier;

pub use dispatch::{InlineDispatcher, TokioDispatcher, UiDispatcher, UiJob};
pub use error::{ReviewError, ReviewResult};
pub use host::{NoopReviewPlatform, ReviewPlatform, SceneHandle, TransientReviewView, ViewHandle};
pub use platform::{Platform, PlatformParseError, PlatformVersion};
pub use selector::{ReviewRequestOutcome, ReviewStatus, ReviewStrategySelector};
pub use store_url::{
    build_listing_url, build_play_market_url, build_play_web_url, build_store_url,
    build_write_review_url, StoreUrlKind, APP_STORE_LISTING_PREFIX, PLAY_MARKET_PREFIX,
    PLAY_WEB_PREFIX, WRITE_REVIEW_QUERY,
};
pub use tier::ReviewCapabilityTier;

pub use url::Url;
