//! Motor relay driver.
//!
//! A single digital output: HIGH energises the relay, LOW releases it.
//!
//! ## Ownership contract
//!
//! The driver owns the pin for the life of the process.  Dropping it drives
//! the line LOW, so any exit path that unwinds the stack (including an
//! error returned from the cycle loop) leaves the motor off.

use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::app::commands::MotorCommand;
use crate::error::{HardwareError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    /// Not driven since the pin was claimed.
    Unset,
    Stopped,
    Running,
}

pub struct MotorDriver<P: OutputPin> {
    pin: P,
    gpio: u8,
    state: MotorState,
}

impl<P: OutputPin> MotorDriver<P> {
    /// Take ownership of an already-configured output pin.  Nothing is
    /// written until the first [`apply`](Self::apply).
    pub fn new(pin: P, gpio: u8) -> Self {
        Self {
            pin,
            gpio,
            state: MotorState::Unset,
        }
    }

    pub fn apply(&mut self, command: MotorCommand) -> Result<()> {
        let res = if command.is_on() {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| HardwareError::GpioWrite {
            pin: self.gpio,
            reason: format!("{e:?}"),
        })?;

        self.state = if command.is_on() {
            MotorState::Running
        } else {
            MotorState::Stopped
        };
        Ok(())
    }

    pub fn state(&self) -> MotorState {
        self.state
    }
}

impl<P: OutputPin> Drop for MotorDriver<P> {
    fn drop(&mut self) {
        match self.pin.set_low() {
            Ok(()) => info!("GPIO{} released LOW", self.gpio),
            Err(e) => warn!("GPIO{} could not be driven LOW on release: {:?}", self.gpio, e),
        }
    }
}
