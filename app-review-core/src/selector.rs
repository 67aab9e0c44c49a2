//! Review strategy selection.
//!
//! The tier is fixed when the selector is built. A request runs exactly one
//! strategy: the reactive path defers to the UI context and returns at once,
//! the scene-scoped path falls through to the global call when no foreground
//! scene exists, and the unavailable tier is a neutral no-op. No path fails.

use crate::dispatch::{InlineDispatcher, UiDispatcher};
use crate::host::{ReviewPlatform, TransientReviewView};
use crate::platform::{Platform, PlatformVersion};
use crate::tier::ReviewCapabilityTier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Whether a prompt was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// A review prompt was requested. The platform may still decline to show it.
    Requested,
    /// No review API exists on this platform version.
    NotAvailable,
}

/// Result of a review request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequestOutcome {
    /// Tier that handled the request.
    pub tier: ReviewCapabilityTier,
    pub status: ReviewStatus,
}

impl ReviewRequestOutcome {
    fn requested(tier: ReviewCapabilityTier) -> Self {
        Self {
            tier,
            status: ReviewStatus::Requested,
        }
    }

    fn not_available() -> Self {
        Self {
            tier: ReviewCapabilityTier::Unavailable,
            status: ReviewStatus::NotAvailable,
        }
    }

    /// Status text reported to the host application.
    pub fn message(&self) -> &'static str {
        match (self.status, self.tier) {
            (ReviewStatus::NotAvailable, _) | (_, ReviewCapabilityTier::Unavailable) => {
                "Review not available"
            }
            (ReviewStatus::Requested, ReviewCapabilityTier::Reactive) => {
                "Requested Review via SwiftUI"
            }
            (ReviewStatus::Requested, _) => "Requested Review",
        }
    }
}

/// Picks and runs the review strategy for one platform version snapshot.
pub struct ReviewStrategySelector {
    tier: ReviewCapabilityTier,
    platform: Arc<dyn ReviewPlatform>,
    dispatcher: Arc<dyn UiDispatcher>,
}

impl ReviewStrategySelector {
    /// Creates a selector for a platform version, running deferred UI work
    /// inline.
    pub fn new(
        platform_kind: Platform,
        version: PlatformVersion,
        platform: Arc<dyn ReviewPlatform>,
    ) -> Self {
        Self::with_tier(
            ReviewCapabilityTier::for_platform(platform_kind, version),
            platform,
            Arc::new(InlineDispatcher),
        )
    }

    /// Creates a selector with an explicit tier and dispatcher.
    pub fn with_tier(
        tier: ReviewCapabilityTier,
        platform: Arc<dyn ReviewPlatform>,
        dispatcher: Arc<dyn UiDispatcher>,
    ) -> Self {
        debug!("Review strategy selector using tier {}", tier);
        Self {
            tier,
            platform,
            dispatcher,
        }
    }

    /// Replaces the dispatcher used by the reactive tier.
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn UiDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn tier(&self) -> ReviewCapabilityTier {
        self.tier
    }

    pub fn is_request_review_available(&self) -> bool {
        self.tier.is_available()
    }

    /// Requests a review prompt using the selected tier.
    pub fn request_review(&self) -> ReviewRequestOutcome {
        let outcome = match self.tier {
            ReviewCapabilityTier::Reactive => self.request_reactive(),
            ReviewCapabilityTier::SceneScopedPrompt => match self.platform.foreground_scene() {
                Some(scene) => {
                    self.platform.request_review_in_scene(&scene);
                    ReviewRequestOutcome::requested(ReviewCapabilityTier::SceneScopedPrompt)
                }
                None => {
                    debug!("No foreground scene, falling back to global review prompt");
                    self.request_global()
                }
            },
            ReviewCapabilityTier::GlobalPrompt => self.request_global(),
            ReviewCapabilityTier::Unavailable => ReviewRequestOutcome::not_available(),
        };

        info!("Review request handled by {} tier", outcome.tier);
        outcome
    }

    fn request_global(&self) -> ReviewRequestOutcome {
        self.platform.request_review();
        ReviewRequestOutcome::requested(ReviewCapabilityTier::GlobalPrompt)
    }

    fn request_reactive(&self) -> ReviewRequestOutcome {
        let platform = Arc::clone(&self.platform);
        self.dispatcher.dispatch(Box::new(move || {
            let Some(scene) = platform.foreground_scene() else {
                debug!("No foreground scene to host the review view");
                return;
            };
            match TransientReviewView::attach(platform.as_ref(), &scene) {
                Some(view) => view.trigger(),
                None => debug!("Scene {} has no key window", scene.as_str()),
            }
        }));

        ReviewRequestOutcome::requested(ReviewCapabilityTier::Reactive)
    }
}

impl std::fmt::Debug for ReviewStrategySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewStrategySelector")
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}
