//! One-shot dispatch onto the UI-owning execution context.

use tokio::runtime::Handle;

/// A deferred unit of UI work.
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Schedules work on the context that owns the view hierarchy.
pub trait UiDispatcher: Send + Sync {
    /// Queues `job` to run once. Must not block on its completion.
    fn dispatch(&self, job: UiJob);
}

/// Runs jobs immediately on the calling thread.
///
/// Suitable when the caller already is the UI context, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl UiDispatcher for InlineDispatcher {
    fn dispatch(&self, job: UiJob) {
        job();
    }
}

/// Runs jobs as tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioDispatcher {
    handle: Handle,
}

impl TokioDispatcher {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Uses the caller's runtime, or `None` outside of one.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl UiDispatcher for TokioDispatcher {
    fn dispatch(&self, job: UiJob) {
        self.handle.spawn(async move { job() });
    }
}
