//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::gpio::{PinId, PinMap};
use crate::motor::WireMode;

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is positive
/// - Each motor has 2, 4 or 5 pins
/// - Configured speeds are positive
/// - Every pin is an output on the platform and listed once per motor
/// - No pin is shared between motors
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        validate_motor(motor, &config.platform.output_pins)?;
    }

    check_pin_conflicts(config)
}

fn validate_motor(config: &MotorConfig, output_pins: &PinMap) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)));
    }

    if let Some(rpm) = config.speed {
        if rpm.value() == 0 {
            return Err(Error::Config(ConfigError::InvalidSpeed(0)));
        }
    }

    validate_pins(&config.pins, output_pins)?;

    Ok(())
}

/// Check a single motor's pin list against the platform.
///
/// Shared by config validation and driver construction so both reject the
/// same inputs.
pub(crate) fn validate_pins(pins: &[PinId], output_pins: &PinMap) -> Result<WireMode> {
    let mode = WireMode::from_wire_count(pins.len())
        .ok_or(Error::Config(ConfigError::InvalidWireCount(pins.len())))?;

    for (i, &pin) in pins.iter().enumerate() {
        if !output_pins.contains(pin) {
            return Err(Error::Config(ConfigError::InvalidPin(pin)));
        }
        if pins[..i].contains(&pin) {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }
    }

    Ok(mode)
}

fn check_pin_conflicts(config: &SystemConfig) -> Result<()> {
    let motors: heapless::Vec<_, 8> = config.motors.iter().collect();

    for (i, (first_name, first)) in motors.iter().enumerate() {
        for (second_name, second) in &motors[i + 1..] {
            if let Some(&pin) = first.pins.iter().find(|p| second.pins.contains(*p)) {
                return Err(Error::Config(ConfigError::PinConflict {
                    pin,
                    first: (*first_name).clone(),
                    second: (*second_name).clone(),
                }));
            }
        }
    }

    Ok(())
}
