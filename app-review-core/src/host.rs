//! Platform collaborators for the review selector.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifies a foreground scene (window scene on iOS, window on macOS).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneHandle(pub String);

impl SceneHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies a transient view attached to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle(pub u64);

/// Native review APIs of the host platform.
///
/// Every call is fire-and-forget: the platform decides whether a prompt is
/// shown and never reports back.
pub trait ReviewPlatform: Send + Sync {
    /// Returns the foreground-active scene, if any.
    fn foreground_scene(&self) -> Option<SceneHandle>;

    /// Legacy review request targeted at a scene.
    fn request_review_in_scene(&self, scene: &SceneHandle);

    /// Legacy review request without a scene.
    fn request_review(&self);

    /// Attaches a hidden, zero-sized review view to the scene's key window.
    /// Returns `None` when the scene has no window able to host it.
    fn attach_review_view(&self, scene: &SceneHandle) -> Option<ViewHandle>;

    /// Fires the declarative review action of an attached view.
    fn trigger_review_action(&self, view: ViewHandle);

    /// Removes a view previously returned by [`ReviewPlatform::attach_review_view`].
    fn detach_review_view(&self, view: ViewHandle);
}

/// Review platform for targets without any review API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReviewPlatform;

impl ReviewPlatform for NoopReviewPlatform {
    fn foreground_scene(&self) -> Option<SceneHandle> {
        None
    }

    fn request_review_in_scene(&self, _scene: &SceneHandle) {}

    fn request_review(&self) {}

    fn attach_review_view(&self, _scene: &SceneHandle) -> Option<ViewHandle> {
        None
    }

    fn trigger_review_action(&self, _view: ViewHandle) {}

    fn detach_review_view(&self, _view: ViewHandle) {}
}

/// A review view that is detached from its window when dropped.
///
/// Detachment runs on every exit path, including a panic inside the review
/// action.
pub struct TransientReviewView<'a, P: ReviewPlatform + ?Sized> {
    platform: &'a P,
    view: ViewHandle,
}

impl<'a, P: ReviewPlatform + ?Sized> TransientReviewView<'a, P> {
    /// Attaches a review view to `scene`, or returns `None` if the platform
    /// could not host one.
    pub fn attach(platform: &'a P, scene: &SceneHandle) -> Option<Self> {
        let view = platform.attach_review_view(scene)?;
        debug!("Attached transient review view {:?} to scene {}", view, scene.as_str());
        Some(Self { platform, view })
    }

    pub fn view(&self) -> ViewHandle {
        self.view
    }

    /// Fires the review action on the attached view.
    pub fn trigger(&self) {
        self.platform.trigger_review_action(self.view);
    }
}

impl<P: ReviewPlatform + ?Sized> Drop for TransientReviewView<'_, P> {
    fn drop(&mut self) {
        self.platform.detach_review_view(self.view);
        debug!("Detached transient review view {:?}", self.view);
    }
}
