//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AgentService (domain)
//! ```
//!
//! Driven adapters (cloud client, motor, serial reader, event sinks)
//! implement these traits.  The [`AgentService`](super::service::AgentService)
//! consumes them via generics, so the domain core never touches sockets,
//! GPIO registers or tty devices directly.

use crate::error::Result;

use super::commands::MotorCommand;
use super::events::AppEvent;
use super::model::{SerialLine, StatusResponse, UploadReceipt};

// ───────────────────────────────────────────────────────────────
// Cloud ports (driven adapters: domain ↔ HTTP)
// ───────────────────────────────────────────────────────────────

/// Source of the desired motor state.
pub trait StatusPort {
    /// Fetch and decode the current status document.
    fn fetch_status(&mut self) -> Result<StatusResponse>;
}

/// Sink for serial telemetry.
pub trait TelemetryPort {
    /// Send `line` verbatim.  A non-2xx answer is returned, not raised.
    fn upload(&mut self, line: &SerialLine) -> Result<UploadReceipt>;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait SensorPort {
    /// Read one line, newline-terminated or cut short by the read timeout.
    /// A timeout is not an error: whatever arrived, possibly nothing, is returned.
    fn read_line(&mut self) -> Result<SerialLine>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait ActuatorPort {
    /// Drive the motor output.  No read-back.
    fn set_motor(&mut self, command: MotorCommand) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
