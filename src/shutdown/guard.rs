//! Authorization gate for the remote shutdown operation.
//!
//! # Responsibilities
//! - Decide whether one inbound shutdown request may act
//! - Map denial reasons to distinct HTTP status codes
//!
//! # Design Decisions
//! - Pure function of policy and request: no side effects, no locks,
//!   safe under concurrent in-flight requests
//! - Rules short-circuit in a fixed order (feature toggle before token)
//! - Token comparison is plain equality. The backend serves a loopback
//!   companion process, so timing side channels are outside the threat
//!   model; revisit if the listener is ever exposed beyond localhost.

use axum::http::HeaderMap;
use thiserror::Error;

use crate::config::ShutdownPolicy;

/// Header carrying the shared shutdown token.
pub const SHUTDOWN_TOKEN_HEADER: &str = "x-shutdown-token";

/// Credentials extracted from one inbound shutdown request.
#[derive(Debug, Clone, Default)]
pub struct ShutdownRequest {
    /// Token presented in the `X-Shutdown-Token` header, if any.
    pub presented_token: Option<String>,
}

impl ShutdownRequest {
    /// Extract the credentials from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let presented_token = headers
            .get(SHUTDOWN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Self { presented_token }
    }
}

/// Why a shutdown request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenyReason {
    /// Remote shutdown is not enabled in the policy (HTTP 403).
    #[error("Remote shutdown is disabled on this server")]
    FeatureDisabled,

    /// A token is required and was missing or wrong (HTTP 401).
    #[error("Invalid or missing shutdown token")]
    InvalidCredential,
}

/// Outcome of evaluating one shutdown request against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

/// Evaluate whether a shutdown request is authorized.
///
/// Rules, in order, short-circuiting on the first failure:
/// 1. The policy must explicitly allow remote shutdown.
/// 2. If a (non-empty) token is configured, the request must present
///    exactly that token.
/// 3. With no configured token, any request passes.
pub fn authorize(policy: &ShutdownPolicy, request: &ShutdownRequest) -> Decision {
    if !policy.allow_remote {
        return Decision::Denied(DenyReason::FeatureDisabled);
    }

    if let Some(required) = policy.required_token() {
        match request.presented_token.as_deref() {
            Some(presented) if presented == required => {}
            _ => return Decision::Denied(DenyReason::InvalidCredential),
        }
    }

    Decision::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(allow_remote: bool, token: Option<&str>) -> ShutdownPolicy {
        ShutdownPolicy {
            allow_remote,
            token: token.map(str::to_owned),
        }
    }

    fn request(token: Option<&str>) -> ShutdownRequest {
        ShutdownRequest {
            presented_token: token.map(str::to_owned),
        }
    }

    #[test]
    fn test_disabled_denies_regardless_of_token() {
        let p = policy(false, Some("s3cr3t"));
        assert_eq!(
            authorize(&p, &request(Some("s3cr3t"))),
            Decision::Denied(DenyReason::FeatureDisabled)
        );
        assert_eq!(
            authorize(&p, &request(None)),
            Decision::Denied(DenyReason::FeatureDisabled)
        );
    }

    #[test]
    fn test_token_required_and_checked() {
        let p = policy(true, Some("s3cr3t"));
        assert_eq!(
            authorize(&p, &request(None)),
            Decision::Denied(DenyReason::InvalidCredential)
        );
        assert_eq!(
            authorize(&p, &request(Some("wrong"))),
            Decision::Denied(DenyReason::InvalidCredential)
        );
        assert_eq!(authorize(&p, &request(Some("s3cr3t"))), Decision::Allowed);
    }

    #[test]
    fn test_no_token_configured_allows_any_request() {
        let p = policy(true, None);
        assert_eq!(authorize(&p, &request(None)), Decision::Allowed);
        assert_eq!(authorize(&p, &request(Some("anything"))), Decision::Allowed);
    }

    #[test]
    fn test_empty_configured_token_means_no_token() {
        let p = policy(true, Some(""));
        assert_eq!(authorize(&p, &request(None)), Decision::Allowed);
    }

    #[test]
    fn test_header_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Shutdown-Token", "s3cr3t".parse().unwrap());
        let req = ShutdownRequest::from_headers(&headers);
        assert_eq!(req.presented_token.as_deref(), Some("s3cr3t"));

        let req = ShutdownRequest::from_headers(&HeaderMap::new());
        assert!(req.presented_token.is_none());
    }
}
