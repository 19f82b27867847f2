//! Actuator drivers and one-shot hardware acquisition.

pub mod hw_init;
pub mod motor;
