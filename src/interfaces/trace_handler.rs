// ============================================================================
// Trace Handler Interface
// Defines the contract for observing iterations as the engine produces them
// ============================================================================

use crate::domain::Iteration;
use std::sync::Mutex;

/// Observer for the iteration trace of a root computation.
/// Implementations can handle logging, progress output, collection, etc.
pub trait TraceHandler: Send + Sync {
    /// Handle one produced iteration; `index` 0 is the initial digit
    fn on_iteration(&self, index: usize, iteration: &Iteration);

    /// Called once after the last iteration
    fn on_complete(&self, _digits: &[u8]) {}
}

/// No-op trace handler for testing
pub struct NoOpTraceHandler;

impl TraceHandler for NoOpTraceHandler {
    fn on_iteration(&self, _index: usize, _iteration: &Iteration) {
        // Do nothing
    }
}

/// Logging trace handler
pub struct LoggingTraceHandler;

impl TraceHandler for LoggingTraceHandler {
    fn on_iteration(&self, index: usize, iteration: &Iteration) {
        tracing::debug!(
            index,
            group = iteration.group,
            digit = iteration.digit,
            guess = %iteration.guess,
            start = %iteration.start,
            epsilon = %iteration.epsilon,
            partial = %iteration.partial,
            "root iteration"
        );
    }

    fn on_complete(&self, digits: &[u8]) {
        tracing::debug!(digit_count = digits.len(), "root digits complete");
    }
}

/// Collects every iteration in order
#[derive(Default)]
pub struct CollectingTraceHandler {
    iterations: Mutex<Vec<(usize, Iteration)>>,
}

impl CollectingTraceHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected `(index, iteration)` pairs, leaving the handler empty
    pub fn take(&self) -> Vec<(usize, Iteration)> {
        let mut guard = self
            .iterations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }
}

impl TraceHandler for CollectingTraceHandler {
    fn on_iteration(&self, index: usize, iteration: &Iteration) {
        self.iterations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((index, iteration.clone()));
    }
}
