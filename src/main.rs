//! Smarti Agent — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  HardwareAdapter       CloudClient        LogEventSink     │
//! │  (Sensor+Actuator)     (Status+Telemetry) (EventSink)      │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ──────────────         │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │        AgentService (poll · actuate · upload ·   │      │
//! │  │                      read)                       │      │
//! │  └──────────────────────────────────────────────────┘      │
//! │                                                            │
//! │  CycleScheduler (fixed 15 s delay, StdDelay)               │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{error, info};
use tracing_subscriber::EnvFilter;

use smarti_agent::adapters::cloud::CloudClient;
use smarti_agent::adapters::hardware::HardwareAdapter;
use smarti_agent::adapters::log_sink::LogEventSink;
use smarti_agent::adapters::shutdown;
use smarti_agent::adapters::time::StdDelay;
use smarti_agent::app::service::AgentService;
use smarti_agent::config::AgentConfig;
use smarti_agent::drivers::hw_init;
use smarti_agent::drivers::motor::MotorDriver;
use smarti_agent::scheduler::CycleScheduler;
use smarti_agent::sensors::serial_line::SerialLineReader;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Smarti agent v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config (compiled-in) ───────────────────────────────
    let config = AgentConfig::default();
    info!("config: {}", serde_json::to_string(&config)?);

    // ── 3. Acquire hardware ───────────────────────────────────
    let pin = hw_init::open_motor_pin(config.motor_gpio)
        .with_context(|| format!("claiming GPIO{} for the motor", config.motor_gpio))?;
    let port = hw_init::open_serial(
        &config.serial_path,
        config.serial_baud,
        config.serial_timeout(),
    )
    .with_context(|| format!("opening telemetry port {}", config.serial_path))?;

    let mut hw = HardwareAdapter::new(
        MotorDriver::new(pin, config.motor_gpio),
        SerialLineReader::new(port, config.serial_timeout()),
    );

    // ── 4. Construct adapters + service ───────────────────────
    let mut cloud = CloudClient::from_config(&config);
    let mut sink = LogEventSink::new();
    let mut app = AgentService::new();
    let mut scheduler = CycleScheduler::new(config.cycle_interval(), StdDelay::new());
    shutdown::register_stop_signals(&scheduler.stop_flag())
        .context("installing SIGINT/SIGTERM handlers")?;

    app.start(&mut sink);

    // ── 5. Cycle loop ─────────────────────────────────────────
    // Returns on failure or after a stop signal.  Either way `hw` drops on
    // the way out, releasing the motor pin LOW and closing the serial port.
    match scheduler.run_until_stopped(&mut app, &mut hw, &mut cloud, &mut sink) {
        Ok(()) => {
            info!("stopped by signal after {} completed cycles", app.cycle_count());
            Ok(())
        }
        Err(e) => {
            error!("stopping after {} completed cycles: {}", app.cycle_count(), e);
            Err(e).context("cycle failed")
        }
    }
}
