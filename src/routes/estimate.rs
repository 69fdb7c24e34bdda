//! Estimate form endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::services::estimate::{self, EstimateError, EstimateRequest, Submission};
use crate::state::AppState;

/// Body of every estimate response: `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[derive(Debug, Serialize)]
pub struct EstimateReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

pub(crate) fn reply_ok() -> Response {
    (StatusCode::OK, Json(EstimateReply { ok: true, error: None })).into_response()
}

pub(crate) fn reply_error(status: StatusCode, message: &'static str) -> Response {
    (status, Json(EstimateReply { ok: false, error: Some(message) })).into_response()
}

pub(crate) fn estimate_error_to_response(err: &EstimateError) -> Response {
    match err {
        EstimateError::MissingFields => reply_error(StatusCode::BAD_REQUEST, "Missing required fields."),
        EstimateError::NotConfigured => reply_error(StatusCode::INTERNAL_SERVER_ERROR, "Missing RESEND_API_KEY."),
        EstimateError::Delivery(_) => reply_error(StatusCode::INTERNAL_SERVER_ERROR, "Email failed to send."),
    }
}

/// `POST /api/estimate` — validate and relay an estimate request by email.
///
/// The body is parsed as JSON whatever `Content-Type` the form sent.
pub async fn submit_estimate(State(state): State<AppState>, body: Bytes) -> Response {
    let submission_id = Uuid::new_v4();

    let request: EstimateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(%submission_id, error = %e, "estimate body rejected");
            return reply_error(StatusCode::BAD_REQUEST, "Invalid request body.");
        }
    };

    match estimate::submit(state.mailer.as_deref(), &state.routing, &request).await {
        Ok(Submission::Delivered) => {
            tracing::info!(%submission_id, city = request.city.trim(), "estimate delivered");
            reply_ok()
        }
        Ok(Submission::Discarded) => {
            tracing::info!(%submission_id, "estimate discarded as spam");
            reply_ok()
        }
        Err(e) => {
            match &e {
                EstimateError::MissingFields => tracing::debug!(%submission_id, "estimate missing required fields"),
                EstimateError::NotConfigured => {
                    tracing::error!(%submission_id, "estimate relay not configured: RESEND_API_KEY missing");
                }
                EstimateError::Delivery(detail) => {
                    tracing::error!(%submission_id, error = %detail, "estimate email delivery failed");
                }
            }
            estimate_error_to_response(&e)
        }
    }
}

#[cfg(test)]
#[path = "estimate_test.rs"]
mod tests;
