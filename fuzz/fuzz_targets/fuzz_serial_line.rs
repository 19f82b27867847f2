//! Fuzz target: `SerialLineReader::read_line`
//!
//! Drives arbitrary byte streams through the line reader and asserts that
//! every line is a contiguous slice of the input, that only the final byte
//! of a line may be a newline, and that the lines reassemble the stream.
//!
//! cargo fuzz run fuzz_serial_line

#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use smarti_agent::sensors::serial_line::{NEWLINE, SerialLineReader};

fuzz_target!(|data: &[u8]| {
    let mut reader = SerialLineReader::new(data, Duration::from_secs(5));
    let mut offset = 0;

    loop {
        let line = reader.read_line().expect("in-memory reads cannot fail");
        if line.is_empty() {
            break;
        }
        let bytes = line.as_bytes();
        assert_eq!(bytes, &data[offset..offset + bytes.len()]);
        assert!(!bytes[..bytes.len() - 1].contains(&NEWLINE));
        offset += bytes.len();
    }

    assert_eq!(offset, data.len());
});
