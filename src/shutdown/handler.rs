//! HTTP handler for the remote shutdown operation.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::server::AppState;
use crate::shutdown::guard::{self, Decision, DenyReason, ShutdownRequest};

/// Acknowledgement body for an accepted shutdown request.
#[derive(Debug, Serialize)]
pub struct ShutdownResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl IntoResponse for DenyReason {
    fn into_response(self) -> Response {
        let status = match self {
            DenyReason::FeatureDisabled => StatusCode::FORBIDDEN,
            DenyReason::InvalidCredential => StatusCode::UNAUTHORIZED,
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// `POST /shutdown` — schedule backend termination after the response is sent.
///
/// The frontend is responsible for stopping its sync service separately.
pub async fn shutdown(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ShutdownResponse>, DenyReason> {
    tracing::info!("shutdown request received");

    let request = ShutdownRequest::from_headers(&headers);
    match guard::authorize(&state.policy, &request) {
        Decision::Denied(reason @ DenyReason::FeatureDisabled) => {
            tracing::warn!("remote shutdown attempt blocked: remote shutdown is disabled");
            Err(reason)
        }
        Decision::Denied(reason @ DenyReason::InvalidCredential) => {
            tracing::warn!("shutdown attempt with invalid or missing token");
            Err(reason)
        }
        Decision::Allowed => {
            // Respond first, terminate after: the task sleeps while the
            // acknowledgement below is flushed to the client.
            state.scheduler.schedule_termination(state.shutdown_delay);
            Ok(Json(ShutdownResponse {
                status: "shutting_down",
                message: "Backend shutdown initiated.",
            }))
        }
    }
}
