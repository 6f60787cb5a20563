//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; levels follow the shutdown contract:
//!   info for request receipt and termination initiation, warn for denied
//!   attempts, error for background task failures
//! - No metrics exporter: the backend is a single-user local service

pub mod logging;
