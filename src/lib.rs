//! Smarti device agent library.
//!
//! Exposes the domain core, the adapters and the drivers for integration
//! testing.  Raspberry Pi specific code is guarded by the `rpi` feature;
//! everything else builds and runs on any host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod scheduler;
pub mod sensors;

pub use error::{Error, Result};
