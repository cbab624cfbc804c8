//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::{truncated, SystemConfig};

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use wire_stepper::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(truncated(e.message())))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Microseconds, Rpm};
    use crate::gpio::PinId;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("pour").unwrap();
        assert_eq!(motor.pins.len(), 4);
        assert_eq!(motor.speed, None);
        assert_eq!(motor.settle_delay, Microseconds(2000));
    }

    #[test]
    fn test_parse_with_platform() {
        let toml = r#"
[platform]
name = "devkit"
output_pins = [2, 4, 5, 12, 13]

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [12, 13]
speed_rpm = 30
settle_delay_us = 0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.platform.name.as_str(), "devkit");
        assert!(config.platform.output_pins.contains(PinId(12)));
        assert!(!config.platform.output_pins.contains(PinId(16)));

        let motor = config.motor("valve").unwrap();
        assert_eq!(motor.speed, Some(Rpm(30)));
        assert_eq!(motor.settle_delay, Microseconds(0));
    }

    #[test]
    fn test_parse_rejects_pin_outside_platform() {
        let toml = r#"
[platform]
output_pins = [2, 4]

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [2, 5]
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidPin(PinId(5))))
        ));
    }

    #[test]
    fn test_parse_error_message() {
        let result = parse_config("[motors.pour]\nname = 12\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }
}
