//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT (or remote shutdown's SIGTERM-to-self)
//!         → signals.rs resolves → server drains → process exits
//! ```

pub mod signals;
