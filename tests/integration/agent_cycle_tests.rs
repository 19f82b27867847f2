//! Integration tests for the AgentService → ports pipeline.
//!
//! Verifies step order, what each cycle uploads, and how a failing step
//! stops the rest of its cycle.

use crate::mock_hw::{ActuatorCall, MockCloud, MockHardware, RecordingSink};

use smarti_agent::app::commands::MotorCommand;
use smarti_agent::app::events::AppEvent;
use smarti_agent::app::model::SerialLine;
use smarti_agent::app::service::AgentService;
use smarti_agent::error::{Error, NetworkError, ParseError};

const ON: &str = r#"{"device_data":{"device_status":"ON"}}"#;
const OFF: &str = r#"{"device_data":{"device_status":"OFF"}}"#;

fn make_app() -> (AgentService, RecordingSink) {
    let mut app = AgentService::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, sink)
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn on_status_drives_motor_high_and_logs_motor_is_on() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let mut cloud = MockCloud::with_statuses(&[ON]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    assert_eq!(hw.calls, vec![ActuatorCall::SetMotor(MotorCommand::On)]);
    assert_eq!(hw.motor_on(), Some(true));
    let console = sink.console();
    assert!(console.iter().any(|l| l == "motor status: ON"));
    assert!(console.iter().any(|l| l == "motor is on"));
}

#[test]
fn off_status_drives_motor_low_and_logs_motor_is_off() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let mut cloud = MockCloud::with_statuses(&[OFF]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    assert_eq!(hw.motor_on(), Some(false));
    assert!(sink.console().iter().any(|l| l == "motor is off"));
}

#[test]
fn lowercase_on_is_treated_as_off() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let body = MockCloud::status_json("on");
    let mut cloud = MockCloud::with_statuses(&[body.as_str()]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    assert_eq!(hw.motor_on(), Some(false));
}

// ── Upload contents ───────────────────────────────────────────

#[test]
fn first_upload_carries_single_space() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"23.5\n"]);
    let mut cloud = MockCloud::with_statuses(&[ON]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    assert_eq!(cloud.uploads, vec![b" ".to_vec()]);
}

#[test]
fn serial_line_is_uploaded_verbatim_by_next_cycle() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"23.5\n", b"24.1\n"]);
    let mut cloud = MockCloud::with_statuses(&[ON, OFF, ON]);

    for _ in 0..3 {
        app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();
    }

    assert_eq!(
        cloud.uploads,
        vec![b" ".to_vec(), b"23.5\n".to_vec(), b"24.1\n".to_vec()]
    );
}

#[test]
fn each_upload_matches_the_preceding_read() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"1\n", b"", b"3"]);
    let mut cloud = MockCloud::with_statuses(&[ON, ON, ON, ON]);

    for _ in 0..4 {
        app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();
    }

    let reads: Vec<SerialLine> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::LineRead(l) => Some(l.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(reads.len(), 4);
    for (i, read) in reads.iter().take(3).enumerate() {
        assert_eq!(&cloud.uploads[i + 1], read.as_bytes(), "cycle {}", i + 2);
    }
}

#[test]
fn empty_read_is_forwarded_as_empty_body() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let mut cloud = MockCloud::with_statuses(&[ON, ON]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();
    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    assert_eq!(cloud.uploads[1], Vec::<u8>::new());
}

// ── Step order ────────────────────────────────────────────────

#[test]
fn events_follow_poll_actuate_upload_read_order() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"7\n"]);
    let mut cloud = MockCloud::with_statuses(&[ON]);

    app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap();

    let kinds: Vec<&str> = sink
        .events
        .iter()
        .map(|e| match e {
            AppEvent::Started => "start",
            AppEvent::StatusReceived(_) => "poll",
            AppEvent::MotorSet(_) => "actuate",
            AppEvent::TelemetryUploaded { .. } => "upload",
            AppEvent::LineRead(_) => "read",
            AppEvent::CycleCompleted(_) => "done",
        })
        .collect();
    assert_eq!(kinds, ["start", "poll", "actuate", "upload", "read", "done"]);
    assert_eq!(app.cycle_count(), 1);
}

// ── Failures ──────────────────────────────────────────────────

#[test]
fn malformed_status_aborts_before_pin_and_upload() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"9\n"]);
    let mut cloud = MockCloud::with_statuses(&["<html>503</html>"]);

    let err = app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::Malformed(_))));
    assert!(hw.calls.is_empty(), "pin must not be written");
    assert!(cloud.uploads.is_empty(), "nothing must be uploaded");
    assert_eq!(hw.reads, 0);
    assert_eq!(app.cycle_count(), 0);
}

#[test]
fn missing_field_aborts_cycle() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let mut cloud = MockCloud::with_statuses(&[r#"{"device_data":null}"#]);

    let err = app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
    assert!(hw.calls.is_empty());
}

#[test]
fn upload_failure_skips_read_and_keeps_pending_line() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_lines(&[b"5\n"]);
    let mut cloud = MockCloud::with_statuses(&[ON]);
    cloud.fail_upload = true;

    let err = app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Transport { .. })));
    assert_eq!(hw.calls.len(), 1, "pin was written before the upload");
    assert_eq!(hw.reads, 0);
    assert_eq!(app.state().pending_line(), &SerialLine::initial());
}

#[test]
fn status_network_failure_propagates() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    let mut cloud = MockCloud::new();

    let err = app.run_cycle(&mut hw, &mut cloud, &mut sink).unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert!(hw.calls.is_empty());
}
