//! Hardware assignments for the Raspberry Pi agent board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers or device paths.

// ---------------------------------------------------------------------------
// Motor relay
// ---------------------------------------------------------------------------

/// Digital output (BCM numbering): HIGH = motor on, LOW = motor off.
pub const MOTOR_GPIO: u8 = 20;

// ---------------------------------------------------------------------------
// Telemetry UART (USB serial adapter)
// ---------------------------------------------------------------------------

/// Device node of the USB-serial adapter carrying sensor readings.
pub const TELEMETRY_SERIAL_PATH: &str = "/dev/ttyUSB0";
/// Line rate of the sensor board.  Framing is fixed at 8-N-1.
pub const TELEMETRY_BAUD: u32 = 38_400;
/// Upper bound on a single `readline`, in milliseconds.
pub const TELEMETRY_READ_TIMEOUT_MS: u64 = 1_000;
