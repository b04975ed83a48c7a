//! JSON envelopes and response builders.

use std::collections::BTreeMap;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::health::HealthVerdict;
use crate::state::AppState;
use crate::timestamp::Iso8601Timestamp;

/// Envelope for the probe endpoints (/health, /ready).
///
/// `details` is omitted from the JSON entirely when empty, so a clean
/// probe reads as just status + timestamp.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<&'static str, String>,
    pub timestamp: Iso8601Timestamp,
}

impl ProbeResponse {
    /// Health envelope carrying the verdict's warnings.
    pub fn from_verdict(verdict: HealthVerdict) -> Self {
        Self {
            status: verdict.state.as_str(),
            details: verdict.warnings,
            timestamp: verdict.timestamp,
        }
    }

    /// Readiness success, no detail payload.
    pub fn ready() -> Self {
        Self {
            status: "ready",
            details: BTreeMap::new(),
            timestamp: Iso8601Timestamp::now(),
        }
    }

    /// Readiness failure with the initializing reason tag.
    pub fn not_ready() -> Self {
        let mut details = BTreeMap::new();
        details.insert("reason", "initializing".to_string());
        Self {
            status: "not ready",
            details,
            timestamp: Iso8601Timestamp::now(),
        }
    }
}

/// Envelope for the root endpoint: who and where this instance is.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub environment: &'static str,
    pub version: String,
    pub hostname: String,
    pub timestamp: Iso8601Timestamp,
}

impl ServiceInfo {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            message: state.environment.greeting(),
            environment: state.environment.as_str(),
            version: state.version.clone(),
            hostname: state.hostname.clone(),
            timestamp: Iso8601Timestamp::now(),
        }
    }
}

/// Serialize a payload into a JSON response.
///
/// An encoding failure is logged server-side and degrades to a generic
/// 500 with no internal detail in the body.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(payload) {
        Ok(body) => Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap(),
        Err(e) => {
            tracing::error!("Error encoding response: {}", e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Plain-text response.
pub fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(body.into()))
        .unwrap()
}
