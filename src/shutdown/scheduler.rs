//! Deferred termination scheduling.
//!
//! # Responsibilities
//! - Launch the sleep-then-terminate task after a request is authorized
//! - Keep the HTTP handler from ever awaiting that task
//! - Contain any failure of the task to the logging sink
//!
//! # Design Decisions
//! - The handler returns while the task sleeps; the delay exceeds typical
//!   response-flush latency, which is what guarantees the acknowledgement
//!   reaches the client first. Soft timing guarantee, not transactional.
//! - A second task awaits the join handle and only logs. Errors and panics
//!   inside the termination task never reach the caller or the runtime.
//! - No retries, no cancellation. Concurrent accepted requests may each
//!   schedule a task; process exit is idempotent in effect.

use std::sync::Arc;
use std::time::Duration;

use crate::shutdown::terminator::{PlatformTerminator, Terminator};

/// Pause between sending the acknowledgement and acting, long enough for
/// the response bytes to flush.
pub const DEFAULT_SHUTDOWN_DELAY: Duration = Duration::from_millis(500);

/// Schedules fire-and-forget termination of the current process.
#[derive(Clone)]
pub struct ShutdownScheduler {
    terminator: Arc<dyn Terminator>,
}

impl ShutdownScheduler {
    /// Scheduler that really terminates the process.
    pub fn new() -> Self {
        Self::with_terminator(Arc::new(PlatformTerminator))
    }

    /// Scheduler with an injected termination strategy (used by tests).
    pub fn with_terminator(terminator: Arc<dyn Terminator>) -> Self {
        Self { terminator }
    }

    /// Schedule process termination after `delay`.
    ///
    /// Returns immediately; the caller must not (and cannot) await the
    /// spawned task. Once scheduled the task cannot be cancelled.
    pub fn schedule_termination(&self, delay: Duration) {
        let terminator = self.terminator.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!("backend shutdown initiated, terminating process");
            terminator.terminate()
        });

        // Completion observer: failures end here, in the log, never in the
        // response path (which has already been sent).
        tokio::spawn(async move {
            match task.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!(error = %e, "shutdown task failed"),
                Err(e) => tracing::error!(error = %e, "shutdown task panicked"),
            }
        });
    }
}

impl Default for ShutdownScheduler {
    fn default() -> Self {
        Self::new()
    }
}
