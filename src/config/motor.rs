//! Motor configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use crate::gpio::PinId;
use crate::motor::WireMode;

use super::units::{Microseconds, Rpm};

/// Settle delay applied after each phase change unless configured otherwise.
///
/// Two ticks of a 1 kHz RTOS tick. At ESP-IDF's default 100 Hz
/// `CONFIG_FREERTOS_HZ` two ticks are 20 ms; configure `settle_delay_us` to
/// match the board's tick rate.
pub const DEFAULT_SETTLE_DELAY: Microseconds = Microseconds(2_000);

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Full steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u32,

    /// Control wires in phase-table order; 2, 4 or 5 entries.
    pub pins: Vec<PinId, 5>,

    /// Speed applied when the driver is built.
    #[serde(default, rename = "speed_rpm")]
    pub speed: Option<Rpm>,

    /// Delay after each phase change before stepping on.
    #[serde(default = "default_settle_delay", rename = "settle_delay_us")]
    pub settle_delay: Microseconds,
}

fn default_settle_delay() -> Microseconds {
    DEFAULT_SETTLE_DELAY
}

impl MotorConfig {
    /// Wiring variant implied by the pin count, if supported.
    pub fn wire_mode(&self) -> Option<WireMode> {
        WireMode::from_wire_count(self.pins.len())
    }

    /// Step interval implied by the configured speed.
    pub fn step_interval(&self) -> Option<Microseconds> {
        self.speed
            .and_then(|rpm| rpm.step_interval(self.steps_per_revolution))
    }
}
