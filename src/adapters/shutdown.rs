//! Stop-signal adapter: SIGINT and SIGTERM set the scheduler's stop flag.
//!
//! The handler only stores `true`; the scheduler notices it after the
//! current pause and returns, so the motor pin is released by `Drop` on
//! the normal exit path.

use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use log::info;
use signal_hook::consts::{SIGINT, SIGTERM};

/// Register SIGINT and SIGTERM to set `flag`.
pub fn register_stop_signals(flag: &Arc<AtomicBool>) -> io::Result<()> {
    for sig in [SIGINT, SIGTERM] {
        signal_hook::flag::register(sig, Arc::clone(flag))?;
    }
    info!("shutdown: SIGINT/SIGTERM will stop after the current cycle");
    Ok(())
}
