//! Error types for wire-stepper.
//!
//! Provides unified error handling across configuration and motor control.

use core::fmt;

use crate::gpio::PinId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all wire-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// A required builder field was never set
    MissingField(&'static str),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u32),
    /// Wire count must be 2, 4 or 5
    InvalidWireCount(usize),
    /// Speed must be > 0 rpm
    InvalidSpeed(u32),
    /// Pin is not an output-capable GPIO on this platform
    InvalidPin(PinId),
    /// Pin listed more than once for the same motor
    DuplicatePin(PinId),
    /// Pin assigned to two different motors
    PinConflict {
        /// Contested pin
        pin: PinId,
        /// Motor that claimed the pin first
        first: heapless::String<32>,
        /// Motor that claimed it again
        second: heapless::String<32>,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin write failed
    PinError,
    /// Platform refused to configure the pin as an output
    PinConfiguration(PinId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidWireCount(v) => {
                write!(f, "Invalid wire count: {}. Valid values: 2, 4, 5", v)
            }
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {} rpm. Must be > 0", v),
            ConfigError::InvalidPin(pin) => {
                write!(f, "GPIO {} is not an output pin on this platform", pin)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO {} listed more than once", pin),
            ConfigError::PinConflict { pin, first, second } => {
                write!(f, "GPIO {} assigned to both '{}' and '{}'", pin, first, second)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PinConfiguration(pin) => {
                write!(f, "Failed to configure GPIO {} as output", pin)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
