//! Sensor subsystem.
//!
//! The only sensor is the external board that prints one reading per line
//! on the telemetry UART.

pub mod serial_line;
