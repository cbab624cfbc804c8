//! Unit types for motor speed and timing.
//!
//! Keeps revolutions per minute and microsecond durations apart at compile
//! time; both appear as bare integers in configuration files.

use serde::Deserialize;

/// Microseconds in one minute.
pub const MICROS_PER_MINUTE: u64 = 60_000_000;

/// Rotational speed in revolutions per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub u32);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Interval between steps at this speed, truncated to whole microseconds.
    ///
    /// Truncation makes the motor run slightly fast when the interval is not
    /// exact. Returns `None` for zero speed or zero steps per revolution.
    #[inline]
    pub fn step_interval(self, steps_per_revolution: u32) -> Option<Microseconds> {
        let steps_per_minute = u64::from(steps_per_revolution) * u64::from(self.0);
        if steps_per_minute == 0 {
            return None;
        }
        // Bounded by MICROS_PER_MINUTE, so always fits in u32
        Some(Microseconds((MICROS_PER_MINUTE / steps_per_minute) as u32))
    }
}

/// Duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Create a new Microseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}
