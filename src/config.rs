//! Agent configuration parameters
//!
//! Every constant the agent runs with, gathered in one place.  There is no
//! runtime override: the binary always uses [`AgentConfig::default()`].

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pins;

/// Cloud API host shared by both endpoints.
pub const API_BASE: &str = "http://smartiapi.azurewebsites.net/api";

/// Core agent configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    // --- Cloud ---
    /// Control endpoint returning the desired motor state.
    pub status_url: String,
    /// Telemetry endpoint accepting the raw serial line.
    pub telemetry_url: String,
    /// Upper bound on each HTTP exchange (milliseconds)
    pub http_timeout_ms: u64,

    // --- Serial ---
    pub serial_path: String,
    pub serial_baud: u32,
    /// Read timeout for one telemetry line (milliseconds)
    pub serial_timeout_ms: u64,

    // --- GPIO ---
    /// BCM number of the motor output.
    pub motor_gpio: u8,

    // --- Timing ---
    /// Delay after each cycle (milliseconds)
    pub cycle_interval_ms: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            // Cloud
            status_url: format!("{API_BASE}/devicecontroller/getdevicestatus/1"),
            telemetry_url: format!("{API_BASE}/sensorcontroller/putsensordata"),
            http_timeout_ms: 10_000,

            // Serial
            serial_path: pins::TELEMETRY_SERIAL_PATH.to_owned(),
            serial_baud: pins::TELEMETRY_BAUD,
            serial_timeout_ms: pins::TELEMETRY_READ_TIMEOUT_MS,

            // GPIO
            motor_gpio: pins::MOTOR_GPIO,

            // Timing
            cycle_interval_ms: 15_000,
        }
    }
}

impl AgentConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn serial_timeout(&self) -> Duration {
        Duration::from_millis(self.serial_timeout_ms)
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.cycle_interval_ms))
    }
}
