//! Cloud adapter — the two HTTP endpoints of the Smarti API.
//!
//! Implements [`StatusPort`] (GET, JSON) and [`TelemetryPort`] (POST, raw
//! bytes) over one blocking [`ureq::Agent`].  Every exchange is bounded by
//! the agent-wide timeout.
//!
//! The POST declares `Content-Type: application/json` but carries the serial
//! line verbatim, not JSON-encoded, so header and body disagree.  This
//! matches what the deployed Python agent has always sent and is kept for
//! wire compatibility.  It is most likely a bug in that agent; whether the
//! service actually needs it is unverified.

use core::time::Duration;

use log::{info, warn};

use crate::app::model::{SerialLine, StatusResponse, UploadReceipt};
use crate::app::ports::{StatusPort, TelemetryPort};
use crate::config::AgentConfig;
use crate::error::{NetworkError, Result};

pub const UPLOAD_CONTENT_TYPE: &str = "application/json";
pub const UPLOAD_ACCEPT: &str = "text/plain";

pub struct CloudClient {
    agent: ureq::Agent,
    status_url: String,
    telemetry_url: String,
}

impl CloudClient {
    pub fn new(
        status_url: impl Into<String>,
        telemetry_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            status_url: status_url.into(),
            telemetry_url: telemetry_url.into(),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            config.status_url.clone(),
            config.telemetry_url.clone(),
            config.http_timeout(),
        )
    }

    /// Collapse ureq's status/transport split: an HTTP error status still
    /// carries a response worth reading, a transport error does not.
    fn response(
        url: &str,
        result: core::result::Result<ureq::Response, ureq::Error>,
    ) -> Result<ureq::Response> {
        match result {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(code, resp)) => {
                warn!("{} answered HTTP {}", url, code);
                Ok(resp)
            }
            Err(ureq::Error::Transport(t)) => Err(NetworkError::Transport {
                url: url.to_owned(),
                reason: t.to_string(),
            }
            .into()),
        }
    }

    fn body_text(url: &str, resp: ureq::Response) -> Result<String> {
        resp.into_string().map_err(|e| {
            NetworkError::Body {
                url: url.to_owned(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

// ── StatusPort implementation ─────────────────────────────────

impl StatusPort for CloudClient {
    fn fetch_status(&mut self) -> Result<StatusResponse> {
        let url = self.status_url.as_str();
        let resp = Self::response(url, self.agent.get(url).call())?;
        let body = Self::body_text(url, resp)?;
        info!("status document: {}", body);
        StatusResponse::from_json(&body)
    }
}

// ── TelemetryPort implementation ──────────────────────────────

impl TelemetryPort for CloudClient {
    fn upload(&mut self, line: &SerialLine) -> Result<UploadReceipt> {
        let url = self.telemetry_url.as_str();
        let result = self
            .agent
            .post(url)
            .set("Content-Type", UPLOAD_CONTENT_TYPE)
            .set("Accept", UPLOAD_ACCEPT)
            .send_bytes(line.as_bytes());
        let resp = Self::response(url, result)?;
        let status = resp.status();
        let body = Self::body_text(url, resp)?;
        Ok(UploadReceipt { status, body })
    }
}
