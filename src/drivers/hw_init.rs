//! One-shot hardware acquisition.
//!
//! Claims the motor GPIO line and opens the telemetry serial port.  Called
//! once from `main()` before the cycle loop starts; the returned handles are
//! held until process exit and release themselves on drop.

use core::time::Duration;

use log::info;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::error::{HardwareError, Result};

/// Open `path` at `baud`, 8-N-1, no flow control, with `timeout` per read.
pub fn open_serial(path: &str, baud: u32, timeout: Duration) -> Result<Box<dyn SerialPort>> {
    let port = serialport::new(path, baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(timeout)
        .open()
        .map_err(|e| HardwareError::SerialInit {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
    info!("hw_init: {} open at {} baud 8N1", path, baud);
    Ok(port)
}

/// Claim BCM `gpio` as an output, initially LOW.
#[cfg(feature = "rpi")]
pub fn open_motor_pin(gpio: u8) -> Result<rppal::gpio::OutputPin> {
    let to_err = |e: rppal::gpio::Error| HardwareError::GpioInit {
        pin: gpio,
        reason: e.to_string(),
    };
    let pin = rppal::gpio::Gpio::new()
        .map_err(to_err)?
        .get(gpio)
        .map_err(to_err)?
        .into_output_low();
    info!("hw_init: GPIO{} configured as output (LOW)", gpio);
    Ok(pin)
}
