//! Shared test doubles for selector tests.

#![allow(dead_code)]

use app_review_core::{ReviewPlatform, SceneHandle, UiDispatcher, UiJob, ViewHandle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A platform call observed by [`RecordingPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ForegroundScene,
    RequestInScene(String),
    RequestGlobal,
    Attach(String),
    Trigger(u64),
    Detach(u64),
}

/// Review platform that records every call.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    scene: Option<SceneHandle>,
    can_host_view: bool,
    panic_on_trigger: bool,
    next_view: AtomicU64,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPlatform {
    /// Platform with a foreground scene and a key window.
    pub fn with_scene(id: &str) -> Self {
        Self {
            scene: Some(SceneHandle::new(id)),
            can_host_view: true,
            ..Default::default()
        }
    }

    /// Platform with no foreground scene.
    pub fn headless() -> Self {
        Self::default()
    }

    /// Scene exists but has no window to host a view.
    pub fn without_window(mut self) -> Self {
        self.can_host_view = false;
        self
    }

    pub fn panicking_on_trigger(mut self) -> Self {
        self.panic_on_trigger = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that ask the platform to show a prompt.
    pub fn prompt_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    Call::RequestInScene(_) | Call::RequestGlobal | Call::Trigger(_)
                )
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ReviewPlatform for RecordingPlatform {
    fn foreground_scene(&self) -> Option<SceneHandle> {
        self.record(Call::ForegroundScene);
        self.scene.clone()
    }

    fn request_review_in_scene(&self, scene: &SceneHandle) {
        self.record(Call::RequestInScene(scene.as_str().to_string()));
    }

    fn request_review(&self) {
        self.record(Call::RequestGlobal);
    }

    fn attach_review_view(&self, scene: &SceneHandle) -> Option<ViewHandle> {
        self.record(Call::Attach(scene.as_str().to_string()));
        if !self.can_host_view {
            return None;
        }
        Some(ViewHandle(self.next_view.fetch_add(1, Ordering::SeqCst) + 1))
    }

    fn trigger_review_action(&self, view: ViewHandle) {
        self.record(Call::Trigger(view.0));
        if self.panic_on_trigger {
            panic!("review action failed");
        }
    }

    fn detach_review_view(&self, view: ViewHandle) {
        self.record(Call::Detach(view.0));
    }
}

/// Dispatcher that holds jobs until the test runs them.
#[derive(Default)]
pub struct QueuedDispatcher {
    jobs: Mutex<Vec<UiJob>>,
}

impl QueuedDispatcher {
    pub fn pending(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn run_all(&self) {
        let jobs: Vec<UiJob> = self.jobs.lock().unwrap().drain(..).collect();
        for job in jobs {
            job();
        }
    }
}

impl UiDispatcher for QueuedDispatcher {
    fn dispatch(&self, job: UiJob) {
        self.jobs.lock().unwrap().push(job);
    }
}
