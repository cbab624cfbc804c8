//! Unit tests for configuration validation.

use wire_stepper::config::{parse_config, validate_config, SystemConfig};
use wire_stepper::error::{ConfigError, Error};
use wire_stepper::PinId;

/// Test validation of a valid two-motor configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]
speed_rpm = 60

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [21, 22]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a three-wire motor.
#[test]
fn test_invalid_wire_count() {
    let toml_str = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidWireCount(3)))
    ));
}

/// Test validation fails for an input-only ESP32 pin.
#[test]
fn test_input_only_pin_rejected() {
    let toml_str = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 36]
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidPin(PinId(36))))
    ));
}

/// Test validation fails when a motor lists the same pin twice.
#[test]
fn test_duplicate_pin_within_motor() {
    let toml_str = r#"
[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [21, 21]
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DuplicatePin(PinId(21))))
    ));
}

/// Test validation fails when two motors share a pin.
#[test]
fn test_pin_shared_between_motors() {
    let toml_str = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [19, 21]
"#;

    let result = parse_config(toml_str);
    match result {
        Err(Error::Config(ConfigError::PinConflict { pin, first, second })) => {
            assert_eq!(pin, PinId(19));
            assert_eq!(first.as_str(), "pour");
            assert_eq!(second.as_str(), "valve");
        }
        other => panic!("expected pin conflict, got {:?}", other.map(|_| ())),
    }
}

/// Test validation fails for zero steps per revolution and zero speed.
#[test]
fn test_zero_values_rejected() {
    let zero_steps = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 0
pins = [16, 17]
"#;
    assert!(matches!(
        parse_config(zero_steps),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));

    let zero_speed = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17]
speed_rpm = 0
"#;
    assert!(matches!(
        parse_config(zero_speed),
        Err(Error::Config(ConfigError::InvalidSpeed(0)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
