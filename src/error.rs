//! Unified error types for the Smarti agent.
//!
//! One `Error` enum with a variant per failure category.  Every step of the
//! cycle returns this type, so the scheduler can propagate the first
//! failure out of the loop without caring which port raised it.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level agent error
// ---------------------------------------------------------------------------

/// Every fallible operation in the agent funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An HTTP exchange with the cloud service failed.
    Network(NetworkError),
    /// The status document could not be decoded.
    Parse(ParseError),
    /// GPIO or serial hardware failed.
    Hardware(HardwareError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Hardware(e) => write!(f, "hardware: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Network errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// DNS, connect, timeout or any other failure before a response arrived.
    Transport { url: String, reason: String },
    /// A response arrived but its body could not be read.
    Body { url: String, reason: String },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { url, reason } => write!(f, "request to {url} failed: {reason}"),
            Self::Body { url, reason } => write!(f, "reading response from {url} failed: {reason}"),
        }
    }
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Body is not syntactically valid JSON.
    Malformed(String),
    /// JSON is valid but `device_data.device_status` is absent or not a string.
    MissingField(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed JSON: {msg}"),
            Self::MissingField(msg) => write!(f, "unexpected document shape: {msg}"),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() {
            Self::MissingField(e.to_string())
        } else {
            Self::Malformed(e.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.into())
    }
}

// ---------------------------------------------------------------------------
// Hardware errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwareError {
    /// The GPIO line could not be claimed as an output.
    GpioInit { pin: u8, reason: String },
    /// Driving the GPIO line failed.
    GpioWrite { pin: u8, reason: String },
    /// The serial device could not be opened.
    SerialInit { path: String, reason: String },
    /// A serial read failed for a reason other than timeout.
    SerialIo(String),
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioInit { pin, reason } => write!(f, "GPIO{pin} init failed: {reason}"),
            Self::GpioWrite { pin, reason } => write!(f, "GPIO{pin} write failed: {reason}"),
            Self::SerialInit { path, reason } => write!(f, "opening {path} failed: {reason}"),
            Self::SerialIo(msg) => write!(f, "serial I/O: {msg}"),
        }
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Self::Hardware(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Agent-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
