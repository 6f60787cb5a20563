//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the backend.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the backend service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Remote shutdown policy.
    pub shutdown: ShutdownPolicy,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:52123").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            // Loopback by default: the backend serves a local desktop app.
            bind_address: "127.0.0.1:52123".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Policy governing the remote shutdown endpoint.
///
/// Constructed once at startup and never mutated afterwards; the HTTP layer
/// holds it behind an `Arc`. Tests build differently-valued instances instead
/// of patching process-wide state.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShutdownPolicy {
    /// Whether the `/shutdown` endpoint may act at all. Defaults to false:
    /// absent explicit opt-in the endpoint refuses, token or no token.
    pub allow_remote: bool,

    /// Optional pre-shared secret. When set (non-empty), requests must carry
    /// it in the `X-Shutdown-Token` header.
    pub token: Option<String>,
}

impl ShutdownPolicy {
    /// The configured token, with an empty string treated as unset.
    pub fn required_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
