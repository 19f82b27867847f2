//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the agent: how a status document
//! becomes a motor command, and the order of the steps in one cycle.
//! All interaction with the network and hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod cycle;
pub mod events;
pub mod model;
pub mod ports;
pub mod service;
