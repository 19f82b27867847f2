//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                  |
//! |------------|--------------------|------------------------------|
//! | `cloud`    | StatusPort         | HTTP GET control endpoint    |
//! |            | TelemetryPort      | HTTP POST telemetry endpoint |
//! | `hardware` | ActuatorPort       | Motor relay GPIO             |
//! |            | SensorPort         | Telemetry UART               |
//! | `log_sink` | EventSink          | Console log output           |
//! | `shutdown` | (stop flag)        | SIGINT / SIGTERM             |
//! | `time`     | DelayNs            | Host thread sleep            |

pub mod cloud;
pub mod hardware;
pub mod log_sink;
pub mod shutdown;
pub mod time;
