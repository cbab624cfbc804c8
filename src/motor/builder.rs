//! Builder pattern for StepperDriver.

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::clock::MonotonicClock;
use crate::config::units::{Microseconds, Rpm};
use crate::config::{truncated, MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::gpio::{PinBank, PinId};

use super::driver::StepperDriver;

/// Builder for creating StepperDriver instances.
pub struct StepperDriverBuilder<CLK, DELAY>
where
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    clock: Option<CLK>,
    delay: Option<DELAY>,
    name: Option<String<32>>,
    steps_per_revolution: Option<u32>,
    /// `Err` holds the length of a pin list too long to store.
    pins: Option<core::result::Result<Vec<PinId, 5>, usize>>,
    speed: Option<Rpm>,
    settle_delay: Option<Microseconds>,
}

impl<CLK, DELAY> Default for StepperDriverBuilder<CLK, DELAY>
where
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<CLK, DELAY> StepperDriverBuilder<CLK, DELAY>
where
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            clock: None,
            delay: None,
            name: None,
            steps_per_revolution: None,
            pins: None,
            speed: None,
            settle_delay: None,
        }
    }

    /// Set the clock used to space steps.
    pub fn clock(mut self, clock: CLK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the delay provider used for the settle delay.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name, truncated to 32 bytes.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(truncated(name));
        self
    }

    /// Set steps per revolution.
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the control pins in phase-table order (2, 4 or 5 of them).
    pub fn pins(mut self, pins: &[PinId]) -> Self {
        self.pins = Some(Vec::from_slice(pins).map_err(|_| pins.len()));
        self
    }

    /// Set the initial speed.
    pub fn speed(mut self, rpm: Rpm) -> Self {
        self.speed = Some(rpm);
        self
    }

    /// Set the pause applied after each phase change.
    pub fn settle_delay(mut self, delay: Microseconds) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.pins = Some(Ok(config.pins.clone()));
        self.speed = config.speed;
        self.settle_delay = Some(config.settle_delay);
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config
            .motor(motor_name)
            .ok_or_else(|| Error::Config(ConfigError::MotorNotFound(truncated(motor_name))))?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the StepperDriver, configuring its pins through `bank`.
    ///
    /// If a speed was given it is applied before the driver is returned. A
    /// zero speed is rejected before the bank is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, or for any reason
    /// listed on [`StepperDriver::new`].
    pub fn build<B>(self, bank: &mut B) -> Result<StepperDriver<B::Pin, CLK, DELAY>>
    where
        B: PinBank,
    {
        let clock = self.clock.ok_or(ConfigError::MissingField("clock"))?;
        let delay = self.delay.ok_or(ConfigError::MissingField("delay"))?;
        let steps = self
            .steps_per_revolution
            .ok_or(ConfigError::MissingField("steps_per_revolution"))?;
        let pins = self
            .pins
            .ok_or(ConfigError::MissingField("pins"))?
            .map_err(ConfigError::InvalidWireCount)?;

        // A bad speed must fail before any pin is configured
        if let Some(rpm) = self.speed.filter(|rpm| rpm.value() == 0) {
            return Err(ConfigError::InvalidSpeed(rpm.value()).into());
        }

        let mut driver = StepperDriver::new(steps, &pins, bank, clock, delay)?;

        if let Some(name) = self.name {
            driver.set_name(name);
        }
        if let Some(settle) = self.settle_delay {
            driver.set_settle_delay(settle);
        }
        if let Some(rpm) = self.speed {
            driver.set_speed(rpm)?;
        }

        Ok(driver)
    }
}
