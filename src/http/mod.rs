//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → shutdown subsystem handler
//!     → response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
