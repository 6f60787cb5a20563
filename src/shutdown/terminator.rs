//! Process termination strategies.
//!
//! # Responsibilities
//! - Terminate the current process with the mechanism the platform supports
//!
//! # Design Decisions
//! - Windows: immediate unconditional exit. A graceful signal to self is not
//!   reliably delivered when the backend runs as a child of the desktop app's
//!   process manager, so cleanup handlers are skipped there on purpose.
//! - Unix: SIGTERM to self, which lands in the server's signal listener and
//!   drains in-flight requests before exit.
//! - Other platforms: immediate exit. There is no signal to send, so the
//!   reliable branch is the only option.
//! - The platform branch is taken inside `terminate`, at the moment of
//!   termination, not cached at scheduler construction.

use thiserror::Error;

/// Errors raised while trying to terminate the process.
#[derive(Debug, Error)]
pub enum TerminationError {
    /// Delivering the graceful termination signal to self failed.
    #[error("failed to signal own process: {0}")]
    Signal(std::io::Error),
}

/// A strategy for ending the current process.
///
/// The production implementation is [`PlatformTerminator`]; tests inject
/// recording or failing implementations instead of killing the test runner.
pub trait Terminator: Send + Sync {
    /// Terminate the current process.
    ///
    /// On success this either does not return (immediate exit) or returns
    /// `Ok(())` after the graceful signal has been delivered.
    fn terminate(&self) -> Result<(), TerminationError>;
}

/// Terminates via the mechanism appropriate for the host platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTerminator;

impl Terminator for PlatformTerminator {
    #[cfg(unix)]
    fn terminate(&self) -> Result<(), TerminationError> {
        // SIGTERM to self lets registered shutdown handlers run.
        let rc = unsafe { libc::kill(libc::getpid(), libc::SIGTERM) };
        if rc != 0 {
            return Err(TerminationError::Signal(std::io::Error::last_os_error()));
        }
        Ok(())
    }

    #[cfg(windows)]
    fn terminate(&self) -> Result<(), TerminationError> {
        // Graceful signals to self are unreliable under the host process
        // manager; exit immediately, bypassing cleanup.
        std::process::exit(0);
    }

    #[cfg(not(any(unix, windows)))]
    fn terminate(&self) -> Result<(), TerminationError> {
        std::process::exit(0);
    }
}
