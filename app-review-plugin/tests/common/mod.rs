//! Shared test doubles for host API tests.

#![allow(dead_code)]

use app_review_core::{ReviewError, ReviewPlatform, ReviewResult, SceneHandle, Url, ViewHandle};
use app_review_lookup::LookupConfig;
use app_review_plugin::{ReviewInfo, ReviewManager, UrlOpener};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use wiremock::MockServer;

/// Opener that records URLs and refuses those with a given prefix.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    refuse_prefixes: Vec<String>,
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn refusing(prefixes: &[&str]) -> Self {
        Self {
            refuse_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open_url(&self, url: &Url) -> bool {
        self.opened.lock().unwrap().push(url.to_string());
        !self
            .refuse_prefixes
            .iter()
            .any(|p| url.as_str().starts_with(p.as_str()))
    }
}

/// Review platform counting prompt requests.
#[derive(Debug, Default)]
pub struct CountingPlatform {
    pub scene_requests: AtomicUsize,
    pub global_requests: AtomicUsize,
    pub triggers: AtomicUsize,
    pub detaches: AtomicUsize,
}

impl ReviewPlatform for CountingPlatform {
    fn foreground_scene(&self) -> Option<SceneHandle> {
        Some(SceneHandle::new("main"))
    }

    fn request_review_in_scene(&self, _scene: &SceneHandle) {
        self.scene_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn request_review(&self) {
        self.global_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn attach_review_view(&self, _scene: &SceneHandle) -> Option<ViewHandle> {
        Some(ViewHandle(1))
    }

    fn trigger_review_action(&self, _view: ViewHandle) {
        self.triggers.fetch_add(1, Ordering::SeqCst);
    }

    fn detach_review_view(&self, _view: ViewHandle) {
        self.detaches.fetch_add(1, Ordering::SeqCst);
    }
}

/// Play review manager with scripted availability.
#[derive(Debug)]
pub struct ScriptedReviewManager {
    available: bool,
    pub flow_requests: AtomicUsize,
    pub launches: Mutex<Vec<String>>,
}

impl ScriptedReviewManager {
    pub fn available() -> Self {
        Self {
            available: true,
            flow_requests: AtomicUsize::new(0),
            launches: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }

    pub fn flow_request_count(&self) -> usize {
        self.flow_requests.load(Ordering::SeqCst)
    }

    pub fn launched_tokens(&self) -> Vec<String> {
        self.launches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewManager for ScriptedReviewManager {
    async fn request_review_flow(&self) -> ReviewResult<ReviewInfo> {
        let n = self.flow_requests.fetch_add(1, Ordering::SeqCst) + 1;
        if self.available {
            Ok(ReviewInfo::new(format!("token-{n}")))
        } else {
            Err(ReviewError::ReviewFlowUnavailable("play services missing".into()))
        }
    }

    async fn launch_review_flow(&self, info: ReviewInfo) -> bool {
        self.launches.lock().unwrap().push(info.token().to_string());
        true
    }
}

pub fn mock_lookup_config(server: &MockServer) -> LookupConfig {
    LookupConfig::with_base_url(server.uri())
}
