//! Thread-safe call recorder for asserting hook invocations.
//!
//! Hooks on an attempt take `FnOnce` closures, so tests observe them through
//! a shared log. Clones of a recorder share the same log.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared, ordered log of named calls.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `call` to the log.
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    /// Returns a closure that records `call` each time it runs.
    #[must_use]
    pub fn hook(&self, call: &'static str) -> impl Fn() + Send + Sync + 'static {
        let recorder = self.clone();
        move || recorder.record(call)
    }

    /// Snapshot of recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of times `call` was recorded.
    #[must_use]
    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|entry| *entry == call).count()
    }

    /// Clears the log.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}
