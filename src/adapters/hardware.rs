//! Hardware adapter — bridges the motor driver and the serial reader to
//! domain port traits.
//!
//! Owns both long-lived resources.  Generic over the pin and the byte
//! stream, so the same adapter runs on the Pi (`rppal` pin, `serialport`
//! handle) and in host tests (recording pin, in-memory stream).

use std::io::Read;

use embedded_hal::digital::OutputPin;

use crate::app::commands::MotorCommand;
use crate::app::model::SerialLine;
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::motor::MotorDriver;
use crate::error::Result;
use crate::sensors::serial_line::SerialLineReader;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P: OutputPin, R: Read> {
    motor: MotorDriver<P>,
    telemetry: SerialLineReader<R>,
}

impl<P: OutputPin, R: Read> HardwareAdapter<P, R> {
    pub fn new(motor: MotorDriver<P>, telemetry: SerialLineReader<R>) -> Self {
        Self { motor, telemetry }
    }

    pub fn motor(&self) -> &MotorDriver<P> {
        &self.motor
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P: OutputPin, R: Read> SensorPort for HardwareAdapter<P, R> {
    fn read_line(&mut self) -> Result<SerialLine> {
        self.telemetry.read_line()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: OutputPin, R: Read> ActuatorPort for HardwareAdapter<P, R> {
    fn set_motor(&mut self, command: MotorCommand) -> Result<()> {
        self.motor.apply(command)
    }
}
