//! # wire-stepper
//!
//! Phase-sequencing driver for 2, 4 and 5 wire stepper motors with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Three wirings**: two-wire, four-wire and five-phase five-wire motors
//! - **embedded-hal 1.0**: Uses `OutputPin` for coils, `DelayNs` for settling
//! - **Injected clock**: Step spacing measured on a [`MonotonicClock`]
//! - **All-or-nothing construction**: Pin lists validated before any pin is touched
//! - **Configuration-driven**: Describe motors and board pins in TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wire_stepper::{PinId, Rpm, StepperDriver};
//!
//! // `bank` hands out configured output pins for the board
//! let mut motor = StepperDriver::four_wire(
//!     200,
//!     [PinId(16), PinId(17), PinId(18), PinId(19)],
//!     &mut bank,
//!     clock,
//!     delay,
//! )?;
//!
//! motor.set_speed(Rpm(60))?;
//! motor.step(200)?; // one revolution forward
//! motor.step(-50)?; // a quarter back
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`StdClock`]
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` records for hosted targets

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

// Core modules
pub mod clock;
pub mod config;
pub mod error;
pub mod gpio;
pub mod motor;

// Re-exports for ergonomic API
pub use clock::MonotonicClock;
pub use config::{validate_config, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use gpio::{OutputConfig, PinBank, PinId, PinMap};
pub use motor::{Direction, StepperDriver, StepperDriverBuilder, WireMode, DRIVER_VERSION};

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Rpm};
