//! GPIO identifiers and the pin configuration capability.
//!
//! Pin *levels* go through embedded-hal's [`OutputPin`]. Turning a numeric
//! GPIO identifier into a configured output is platform work, abstracted by
//! [`PinBank`] so a driver can validate its whole pin list before touching
//! any hardware.

use core::fmt;

use embedded_hal::digital::OutputPin;
use serde::Deserialize;

/// Numeric GPIO identifier as printed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct PinId(pub u8);

impl PinId {
    /// Get the raw GPIO number.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PinId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Set of GPIOs that can be configured as digital outputs.
///
/// Stored as a 64-bit mask, so identifiers above 63 are never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap(u64);

impl PinMap {
    /// Output-capable GPIOs of the ESP32: 0-19, 21-23, 25-27, 32 and 33.
    ///
    /// GPIO 20, 24 and 28-31 are not bonded out; 34-39 are input-only.
    pub const ESP32: Self = Self(0x0000_0003_0EEF_FFFF);

    /// Empty map.
    pub const EMPTY: Self = Self(0);

    /// Build a map from a raw bit mask (bit n = GPIO n).
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Build a map from a list of GPIO numbers, ignoring numbers above 63.
    pub fn from_pins(pins: &[u8]) -> Self {
        pins.iter()
            .fold(Self::EMPTY, |map, &pin| map.with(PinId(pin)))
    }

    /// Return a copy of this map with `pin` added.
    #[inline]
    pub const fn with(self, pin: PinId) -> Self {
        if pin.0 < 64 {
            Self(self.0 | (1u64 << pin.0))
        } else {
            self
        }
    }

    /// Check if `pin` can be driven as an output.
    #[inline]
    pub const fn contains(&self, pin: PinId) -> bool {
        pin.0 < 64 && self.0 & (1u64 << pin.0) != 0
    }

    /// Raw bit mask.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Number of pins in the map.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Check if no pin is available.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::ESP32
    }
}

impl<'de> Deserialize<'de> for PinMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pins = heapless::Vec::<u8, 64>::deserialize(deserializer)?;
        if let Some(&pin) = pins.iter().find(|&&pin| pin >= 64) {
            return Err(serde::de::Error::custom(OutOfRange(pin)));
        }
        Ok(Self::from_pins(&pins))
    }
}

struct OutOfRange(u8);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO {} out of range (max 63)", self.0)
    }
}

/// Electrical configuration applied when a pin becomes an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Enable the internal pull-up.
    pub pull_up: bool,
    /// Enable the internal pull-down.
    pub pull_down: bool,
    /// Enable edge interrupts on the pin.
    pub interrupts: bool,
}

/// Platform GPIO controller that hands out configured output pins.
///
/// Implementations wrap the HAL's pin constructors (for example an ESP32
/// `gpio_config` call followed by `PinDriver::output`). Configuration should
/// be idempotent.
pub trait PinBank {
    /// Output pin type handed to the driver.
    type Pin: OutputPin;

    /// Platform error reported when configuration fails.
    type Error: fmt::Debug;

    /// GPIOs this bank can configure as outputs.
    fn output_pins(&self) -> &PinMap;

    /// Configure `pin` as a digital output and take ownership of it.
    fn configure_output(
        &mut self,
        pin: PinId,
        config: OutputConfig,
    ) -> Result<Self::Pin, Self::Error>;
}

impl<B: PinBank> PinBank for &mut B {
    type Pin = B::Pin;
    type Error = B::Error;

    fn output_pins(&self) -> &PinMap {
        (**self).output_pins()
    }

    fn configure_output(
        &mut self,
        pin: PinId,
        config: OutputConfig,
    ) -> Result<Self::Pin, Self::Error> {
        (**self).configure_output(pin, config)
    }
}
