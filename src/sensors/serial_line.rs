//! Line reader for the telemetry UART.
//!
//! Reads byte by byte until a `\n` arrives or the read budget expires,
//! whichever comes first.  The budget covers the whole line, not each
//! byte, so a board that streams without ever sending a newline cannot
//! hold the cycle.
//!
//! The reader is generic over [`std::io::Read`]: the binary hands it the
//! boxed `serialport` handle, tests hand it in-memory scripts.

use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};

use log::debug;

use crate::app::model::SerialLine;
use crate::error::{HardwareError, Result};

pub const NEWLINE: u8 = b'\n';

pub struct SerialLineReader<R: Read> {
    port: R,
    timeout: Duration,
}

impl<R: Read> SerialLineReader<R> {
    pub fn new(port: R, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// Bytes up to and including the first newline, or whatever arrived
    /// before the budget ran out.  End of stream behaves like a timeout.
    pub fn read_line(&mut self) -> Result<SerialLine> {
        let deadline = Instant::now() + self.timeout;
        let mut line = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    line.push(byte[0]);
                    if byte[0] == NEWLINE {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                    debug!("serial: timed out after {} bytes", line.len());
                    break;
                }
                Err(e) => return Err(HardwareError::SerialIo(e.to_string()).into()),
            }
            if Instant::now() >= deadline {
                debug!("serial: line budget spent after {} bytes", line.len());
                break;
            }
        }

        Ok(SerialLine::from(line))
    }
}
