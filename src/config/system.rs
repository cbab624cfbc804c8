//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::gpio::PinMap;

use super::motor::MotorConfig;

/// Target board description.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Board or chip name, informational only.
    #[serde(default = "default_platform_name")]
    pub name: String<16>,

    /// GPIOs usable as outputs; defaults to the ESP32 set.
    #[serde(default)]
    pub output_pins: PinMap,
}

fn default_platform_name() -> String<16> {
    String::try_from("esp32").unwrap_or_default()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            name: default_platform_name(),
            output_pins: PinMap::default(),
        }
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Board the motors are wired to.
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Named motor configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, 8>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }
}
