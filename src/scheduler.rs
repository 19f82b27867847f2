//! Cycle scheduler.
//!
//! One state, one transition: run a cycle, wait the fixed interval, repeat.
//! The wait is measured from the end of one cycle to the start of the next,
//! so network and serial latency stretch the period rather than eating into
//! the pause.  There is no jitter, backoff or catch-up.
//!
//! The first failing cycle ends the loop and its error is returned to the
//! caller; there is no retry.
//!
//! The stop flag is checked after each pause, never mid-cycle.  Setting it
//! (from a signal handler, see [`adapters::shutdown`](crate::adapters::shutdown))
//! makes the loop return `Ok(())` so the caller's hardware handles drop
//! normally.

use core::time::Duration;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::{ActuatorPort, EventSink, SensorPort, StatusPort, TelemetryPort};
use crate::app::service::AgentService;
use crate::error::Result;

pub struct CycleScheduler<D: DelayNs> {
    interval_ms: u32,
    delay: D,
    stop: Arc<AtomicBool>,
}

impl<D: DelayNs> CycleScheduler<D> {
    /// Sub-millisecond parts of `interval` are dropped; intervals beyond
    /// `u32::MAX` milliseconds saturate.
    pub fn new(interval: Duration, delay: D) -> Self {
        let interval_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
        Self {
            interval_ms,
            delay,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag that ends [`run_until_stopped`](Self::run_until_stopped)
    /// at the next cycle boundary.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    /// Run cycles until one fails or a stop is requested.
    pub fn run_until_stopped(
        &mut self,
        app: &mut AgentService,
        hw: &mut (impl SensorPort + ActuatorPort),
        cloud: &mut (impl StatusPort + TelemetryPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        info!("scheduler: cycling every {} ms", self.interval_ms);
        loop {
            self.step(app, hw, cloud, sink)?;
            if self.stop.load(Ordering::Acquire) {
                info!("scheduler: stop requested after cycle {}", app.cycle_count());
                return Ok(());
            }
        }
    }

    /// Run exactly `cycles` cycles, each followed by the interval delay.
    pub fn run_cycles(
        &mut self,
        cycles: u64,
        app: &mut AgentService,
        hw: &mut (impl SensorPort + ActuatorPort),
        cloud: &mut (impl StatusPort + TelemetryPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        for _ in 0..cycles {
            self.step(app, hw, cloud, sink)?;
        }
        Ok(())
    }

    fn step(
        &mut self,
        app: &mut AgentService,
        hw: &mut (impl SensorPort + ActuatorPort),
        cloud: &mut (impl StatusPort + TelemetryPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        app.run_cycle(hw, cloud, sink)?;
        self.delay.delay_ms(self.interval_ms);
        Ok(())
    }

    pub fn into_delay(self) -> D {
        self.delay
    }
}
