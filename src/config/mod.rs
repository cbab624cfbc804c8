//! Configuration module for wire-stepper.
//!
//! Provides types for loading and validating motor configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, DEFAULT_SETTLE_DELAY};
pub use system::{PlatformConfig, SystemConfig};
pub use validation::validate_config;
pub(crate) use validation::validate_pins;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Rpm};

/// Copy as much of `text` as fits, cutting on a character boundary.
pub(crate) fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
