//! REST helpers for the lead and stats endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning [`ApiError::Transport`],
//! since these endpoints are only reachable from the browser.
//!
//! Response interpretation is split into pure functions over `(status, body)`
//! so the success/failure rules are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ErrorBody, LeadSubmission, StatsSnapshot};

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decide the outcome of `POST /api/leads` from the raw response.
///
/// Success needs a 2xx status and a JSON body. A failure carries the
/// server's `detail` string when the body has one.
#[cfg(any(test, feature = "csr"))]
fn interpret_submit_response(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        return serde_json::from_str::<serde_json::Value>(body)
            .map(|_| ())
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_message());
    Err(ApiError::Status { status, detail })
}

/// Decide the outcome of `GET /api/stats` from the raw response.
#[cfg(any(test, feature = "csr"))]
fn interpret_stats_response(status: u16, body: &str) -> Result<StatsSnapshot, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status { status, detail: None });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submit a validated lead.
///
/// # Errors
///
/// Returns [`ApiError`] if the request cannot be sent, the server answers with
/// a non-2xx status, or a 2xx body is not JSON.
pub async fn submit_lead(endpoint: &str, lead: &LeadSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(lead)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        interpret_submit_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, lead);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch the public statistics summary.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or a body
/// that does not decode as [`StatsSnapshot`].
pub async fn fetch_stats(endpoint: &str) -> Result<StatsSnapshot, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        interpret_stats_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
