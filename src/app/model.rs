//! Data exchanged between the ports and the service.

use core::fmt;

use serde::Deserialize;

use crate::error::{ParseError, Result};

// ───────────────────────────────────────────────────────────────
// Status document (GET response)
// ───────────────────────────────────────────────────────────────

/// `{"device_data": {"device_status": "..."}}`; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub device_data: DeviceData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceData {
    pub device_status: String,
}

impl StatusResponse {
    /// Decode a status document.  A non-string `device_status` is a
    /// shape error, not a coercion.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| ParseError::from(e).into())
    }

    pub fn device_status(&self) -> &str {
        &self.device_data.device_status
    }
}

// ───────────────────────────────────────────────────────────────
// Serial line
// ───────────────────────────────────────────────────────────────

/// Raw bytes of one telemetry line, newline included when one arrived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerialLine(Vec<u8>);

impl SerialLine {
    /// Value carried by the first upload, before any serial read.
    pub const INITIAL: &'static [u8] = b" ";

    pub fn initial() -> Self {
        Self(Self::INITIAL.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u8>> for SerialLine {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SerialLine {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Lossy UTF-8 with control characters escaped, for log lines.
impl fmt::Display for SerialLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

// ───────────────────────────────────────────────────────────────
// Upload receipt (POST response)
// ───────────────────────────────────────────────────────────────

/// What the telemetry endpoint answered.  Never validated, only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: u16,
    pub body: String,
}
