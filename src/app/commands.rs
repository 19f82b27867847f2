//! Inbound commands to the actuator.
//!
//! The cloud never sends a command directly; it publishes a status string.
//! [`MotorCommand::from_status`] is the single place that string is
//! interpreted.

use core::fmt;

/// Status value that switches the motor on.  Compared byte-for-byte.
pub const STATUS_ON: &str = "ON";

/// Desired state of the motor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorCommand {
    On,
    Off,
}

impl MotorCommand {
    /// `On` only for exactly `"ON"`; every other value, including `"on"`,
    /// `""` and `"ON "`, is `Off`.
    pub fn from_status(status: &str) -> Self {
        if status == STATUS_ON {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Logic level to drive on the output pin.
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}
