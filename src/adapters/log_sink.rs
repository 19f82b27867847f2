//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one console line per application
//! event through the `log` facade.

use log::{debug, info};

use crate::app::commands::MotorCommand;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Console text for `event`.
pub fn render(event: &AppEvent) -> String {
    match event {
        AppEvent::Started => "START | entering cycle loop".to_owned(),
        AppEvent::StatusReceived(status) => format!("motor status: {status}"),
        AppEvent::MotorSet(MotorCommand::On) => "motor is on".to_owned(),
        AppEvent::MotorSet(MotorCommand::Off) => "motor is off".to_owned(),
        AppEvent::TelemetryUploaded { line, receipt } => format!(
            "UPLOAD | body={} | HTTP {} | {}",
            line,
            receipt.status,
            receipt.body.trim_end()
        ),
        AppEvent::LineRead(line) => format!("SERIAL | {} ({} bytes)", line, line.len()),
        AppEvent::CycleCompleted(n) => format!("CYCLE | #{n} done"),
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CycleCompleted(_) => debug!("{}", render(event)),
            _ => info!("{}", render(event)),
        }
    }
}
