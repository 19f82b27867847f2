//! Fuzz target: `StatusResponse::from_json`
//!
//! Feeds arbitrary bytes as a status document and asserts that decoding
//! never panics and that any accepted document maps to exactly one motor
//! command.
//!
//! cargo fuzz run fuzz_status_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use smarti_agent::app::commands::MotorCommand;
use smarti_agent::app::model::StatusResponse;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(status) = StatusResponse::from_json(body) {
        let cmd = MotorCommand::from_status(status.device_status());
        assert_eq!(cmd.is_on(), status.device_status() == "ON");
    }
});
