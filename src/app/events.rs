//! Outbound application events.
//!
//! The [`AgentService`](super::service::AgentService) emits these through the
//! [`EventSink`](super::ports::EventSink) port, one per completed step.
//! Adapters on the other side decide what to do with them.

use super::commands::MotorCommand;
use super::model::{SerialLine, UploadReceipt};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service is about to enter the cycle loop.
    Started,

    /// The status endpoint answered with this `device_status`.
    StatusReceived(String),

    /// The motor output was driven.
    MotorSet(MotorCommand),

    /// A line was posted to the telemetry endpoint.
    TelemetryUploaded { line: SerialLine, receipt: UploadReceipt },

    /// A line was read from the serial peripheral.
    LineRead(SerialLine),

    /// Every step of the numbered cycle succeeded.
    CycleCompleted(u64),
}
