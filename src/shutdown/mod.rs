//! Remote shutdown subsystem.
//!
//! # Data Flow
//! ```text
//! POST /shutdown
//!     → handler.rs (extract X-Shutdown-Token)
//!     → guard.rs (policy decision: 403 / 401 / allowed)
//!     → scheduler.rs (spawn sleep-then-terminate task, respond 200)
//!     → terminator.rs (platform dispatch: exit now / SIGTERM to self)
//! ```
//!
//! # Design Decisions
//! - Guard is pure; scheduler is fire-and-forget with a logging-only
//!   completion observer
//! - Response is sent before the task wakes: respond-then-terminate ordering
//! - Termination strategy sits behind a trait so tests never kill the runner

pub mod guard;
pub mod handler;
pub mod scheduler;
pub mod terminator;

use axum::{routing::post, Router};

use crate::http::server::AppState;

pub use guard::{authorize, Decision, DenyReason, ShutdownRequest, SHUTDOWN_TOKEN_HEADER};
pub use scheduler::{ShutdownScheduler, DEFAULT_SHUTDOWN_DELAY};
pub use terminator::{PlatformTerminator, TerminationError, Terminator};

/// Router for the shutdown operation.
pub fn setup_shutdown_router(state: AppState) -> Router {
    Router::new()
        .route("/shutdown", post(handler::shutdown))
        .with_state(state)
}
