//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lumina_backend::config::AppConfig;
use lumina_backend::http::HttpServer;
use lumina_backend::shutdown::{ShutdownScheduler, TerminationError, Terminator};

/// Delay injected into test servers; short so tests can observe the
/// termination firing without long sleeps.
pub const TEST_SHUTDOWN_DELAY: Duration = Duration::from_millis(20);

/// Counts termination attempts instead of ending the test process.
pub struct RecordingTerminator {
    fired: AtomicUsize,
}

impl RecordingTerminator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fired: AtomicUsize::new(0),
        })
    }

    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self) -> Result<(), TerminationError> {
        self.fired.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Always fails, for failure-isolation tests.
#[allow(dead_code)]
pub struct FailingTerminator;

impl Terminator for FailingTerminator {
    fn terminate(&self) -> Result<(), TerminationError> {
        Err(TerminationError::Signal(std::io::Error::other(
            "injected termination failure",
        )))
    }
}

/// Spawn a backend server on an ephemeral port with an injected terminator.
pub async fn start_backend(config: AppConfig, terminator: Arc<dyn Terminator>) -> SocketAddr {
    let scheduler = ShutdownScheduler::with_terminator(terminator);
    let server = HttpServer::with_scheduler(config, scheduler, TEST_SHUTDOWN_DELAY);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Sleep long enough for a scheduled termination to have fired.
pub async fn wait_for_termination_window() {
    tokio::time::sleep(TEST_SHUTDOWN_DELAY * 10).await;
}
