//! Unit tests for TOML configuration parsing.

use wire_stepper::config::units::{Microseconds, Rpm};
use wire_stepper::config::{load_config, SystemConfig, DEFAULT_SETTLE_DELAY};
use wire_stepper::error::{ConfigError, Error};
use wire_stepper::{PinId, PinMap, WireMode};

/// Test parsing a valid four-wire motor configuration from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]
speed_rpm = 60
settle_delay_us = 1500
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("pour").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "Pour Arm");
    assert_eq!(motor.steps_per_revolution, 200);
    assert_eq!(
        motor.pins.as_slice(),
        &[PinId(16), PinId(17), PinId(18), PinId(19)]
    );
    assert_eq!(motor.speed, Some(Rpm(60)));
    assert_eq!(motor.settle_delay, Microseconds(1500));
    assert_eq!(motor.wire_mode(), Some(WireMode::FourWire));
}

/// Test that optional fields fall back to their defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [12, 13]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("valve").expect("Motor not found");

    assert_eq!(motor.speed, None);
    assert_eq!(motor.settle_delay, DEFAULT_SETTLE_DELAY);
    assert_eq!(config.platform.name.as_str(), "esp32");
    assert_eq!(config.platform.output_pins, PinMap::ESP32);
}

/// Test parsing a five-wire motor alongside a custom platform pin set.
#[test]
fn test_parse_five_wire_with_platform() {
    let toml_str = r#"
[platform]
name = "s2-mini"
output_pins = [1, 2, 3, 4, 5, 6, 7]

[motors.carousel]
name = "Carousel"
steps_per_revolution = 500
pins = [1, 2, 3, 4, 5]
speed_rpm = 12
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.platform.output_pins.len(), 7);
    assert!(!config.platform.output_pins.contains(PinId(16)));

    let motor = config.motor("carousel").expect("Motor not found");
    assert_eq!(motor.wire_mode(), Some(WireMode::FiveWire));
    // 60_000_000 / (500 * 12) = 10_000
    assert_eq!(motor.step_interval(), Some(Microseconds(10_000)));
}

/// Test that more than five pins are rejected during parsing.
#[test]
fn test_too_many_pins_rejected() {
    let toml_str = r#"
[motors.bad]
name = "bad_config"
steps_per_revolution = 200
pins = [12, 13, 14, 15, 16, 17]
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject six control wires");
}

/// Test that platform pins above 63 are rejected during parsing.
#[test]
fn test_platform_pin_out_of_range() {
    let toml_str = r#"
[platform]
output_pins = [2, 64]

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [2, 4]
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    let err = result.expect_err("GPIO 64 should not parse");
    assert!(err.to_string().contains("GPIO 64"));
}

/// Test that loading a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("definitely/not/here/motors.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("wire-stepper-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]
speed_rpm = 60
"#,
    )
    .expect("Failed to write config");

    let config = load_config(&path);
    let _ = std::fs::remove_file(&path);

    let config = config.expect("Config should load");
    assert!(config.motor("pour").is_some());
    assert_eq!(config.motor_names().count(), 1);
}
