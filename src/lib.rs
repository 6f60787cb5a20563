//! Lumina backend control service.
//!
//! Backend process of a desktop media-management application. The desktop
//! frontend launches this process and talks to it over loopback HTTP; the
//! one operation exposed here is the authenticated remote shutdown endpoint
//! the frontend calls when the user quits the app.
//!
//! # Architecture Overview
//!
//! ```text
//! POST /shutdown ──▶ http::server ──▶ shutdown::guard ──▶ 403 / 401
//!                                          │
//!                                      allowed
//!                                          ▼
//!                              shutdown::scheduler (spawn, respond 200)
//!                                          ▼ after delay
//!                              shutdown::terminator
//!                                 ├─ unix: SIGTERM to self ─▶ lifecycle::signals ─▶ drain
//!                                 └─ windows/other: immediate exit
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod shutdown;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use config::ShutdownPolicy;
pub use http::HttpServer;
pub use shutdown::{ShutdownScheduler, Terminator};
