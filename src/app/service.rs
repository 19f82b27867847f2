//! Application service — the hexagonal core.
//!
//! [`AgentService`] owns the [`CycleState`] and runs one cycle at a time
//! against the injected ports.  The step order is fixed:
//!
//! ```text
//!  StatusPort ──▶ ┌──────────────────────┐ ──▶ ActuatorPort
//!                 │     AgentService     │
//! TelemetryPort ◀─│  poll · actuate ·    │◀── SensorPort
//!                 │  upload · read       │ ──▶ EventSink
//!                 └──────────────────────┘
//! ```
//!
//! The upload sends the line stored by the previous cycle's read, so the
//! first upload carries [`SerialLine::INITIAL`](super::model::SerialLine::INITIAL).
//! The first failing step aborts the cycle; later steps do not run and the
//! stored line is left untouched.

use log::{debug, info};

use crate::error::Result;

use super::commands::MotorCommand;
use super::cycle::CycleState;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, SensorPort, StatusPort, TelemetryPort};

pub struct AgentService {
    state: CycleState,
}

impl Default for AgentService {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentService {
    pub fn new() -> Self {
        Self {
            state: CycleState::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AgentService started");
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: poll → actuate → upload → read.
    ///
    /// `hw` satisfies both [`SensorPort`] and [`ActuatorPort`] and `cloud`
    /// both [`StatusPort`] and [`TelemetryPort`], mirroring how the two
    /// physical resources are owned.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        cloud: &mut (impl StatusPort + TelemetryPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        debug!("cycle {} begin", self.state.completed() + 1);

        // 1. Poll the control endpoint
        let status = cloud.fetch_status()?;
        sink.emit(&AppEvent::StatusReceived(status.device_status().to_owned()));

        // 2. Drive the motor
        let command = MotorCommand::from_status(status.device_status());
        hw.set_motor(command)?;
        sink.emit(&AppEvent::MotorSet(command));

        // 3. Upload the line stored by the previous read
        let line = self.state.pending_line().clone();
        let receipt = cloud.upload(&line)?;
        sink.emit(&AppEvent::TelemetryUploaded { line, receipt });

        // 4. Read the line the next cycle will upload
        let fresh = hw.read_line()?;
        sink.emit(&AppEvent::LineRead(fresh.clone()));
        self.state.store_line(fresh);

        let n = self.state.complete();
        sink.emit(&AppEvent::CycleCompleted(n));
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Cycles that ran every step successfully.
    pub fn cycle_count(&self) -> u64 {
        self.state.completed()
    }
}
