//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener
//! - Serve with graceful shutdown (Ctrl+C, SIGTERM)

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, ShutdownPolicy};
use crate::lifecycle::signals::shutdown_signal;
use crate::shutdown::scheduler::{ShutdownScheduler, DEFAULT_SHUTDOWN_DELAY};
use crate::shutdown::setup_shutdown_router;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable shutdown policy, fixed at startup.
    pub policy: Arc<ShutdownPolicy>,
    pub scheduler: ShutdownScheduler,
    /// Pause between acknowledgement and termination.
    pub shutdown_delay: Duration,
}

/// HTTP server for the backend.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Uses the real platform terminator; accepted shutdown requests end
    /// this process.
    pub fn new(config: AppConfig) -> Self {
        Self::with_scheduler(config, ShutdownScheduler::new(), DEFAULT_SHUTDOWN_DELAY)
    }

    /// Create a server with an injected scheduler and delay.
    ///
    /// Tests use this to observe scheduled terminations instead of dying.
    pub fn with_scheduler(
        config: AppConfig,
        scheduler: ShutdownScheduler,
        shutdown_delay: Duration,
    ) -> Self {
        let state = AppState {
            policy: Arc::new(config.shutdown.clone()),
            scheduler,
            shutdown_delay,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        setup_shutdown_router(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the graceful shutdown signal fires and in-flight
    /// requests have drained. The Unix termination path relies on this: the
    /// scheduler's SIGTERM to self is what resolves `shutdown_signal`.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
