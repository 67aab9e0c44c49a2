//! Review capability tiers.
//!
//! Each platform version maps to exactly one tier. Tiers are declared in
//! preference order, so the derived `Ord` sorts the most capable tier first.

use crate::platform::{Platform, PlatformVersion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to ask the platform for a review prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCapabilityTier {
    /// Declarative review action fired from a transient view.
    Reactive,
    /// Legacy review call targeted at the foreground scene.
    SceneScopedPrompt,
    /// Legacy review call without a scene.
    GlobalPrompt,
    /// Platform predates every review API.
    Unavailable,
}

impl ReviewCapabilityTier {
    /// All tiers, most capable first.
    pub const ALL: [ReviewCapabilityTier; 4] = [
        ReviewCapabilityTier::Reactive,
        ReviewCapabilityTier::SceneScopedPrompt,
        ReviewCapabilityTier::GlobalPrompt,
        ReviewCapabilityTier::Unavailable,
    ];

    /// Picks the tier for a platform version snapshot.
    ///
    /// | Platform | Reactive | SceneScopedPrompt | GlobalPrompt |
    /// |----------|----------|-------------------|--------------|
    /// | iOS      | 16.0     | 14.0              | 10.3         |
    /// | macOS    | 14.0     | -                 | 10.14        |
    pub fn for_platform(platform: Platform, version: PlatformVersion) -> Self {
        match platform {
            Platform::Ios => {
                if version.at_least(16, 0) {
                    ReviewCapabilityTier::Reactive
                } else if version.at_least(14, 0) {
                    ReviewCapabilityTier::SceneScopedPrompt
                } else if version.at_least(10, 3) {
                    ReviewCapabilityTier::GlobalPrompt
                } else {
                    ReviewCapabilityTier::Unavailable
                }
            }
            Platform::MacOs => {
                if version.at_least(14, 0) {
                    ReviewCapabilityTier::Reactive
                } else if version.at_least(10, 14) {
                    ReviewCapabilityTier::GlobalPrompt
                } else {
                    ReviewCapabilityTier::Unavailable
                }
            }
        }
    }

    /// Returns true for every tier except [`ReviewCapabilityTier::Unavailable`].
    pub fn is_available(&self) -> bool {
        !matches!(self, ReviewCapabilityTier::Unavailable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewCapabilityTier::Reactive => "reactive",
            ReviewCapabilityTier::SceneScopedPrompt => "scene_scoped_prompt",
            ReviewCapabilityTier::GlobalPrompt => "global_prompt",
            ReviewCapabilityTier::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ReviewCapabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
