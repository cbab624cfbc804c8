//! Stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types plus an injected
//! [`MonotonicClock`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use heapless::{String, Vec};

use crate::clock::MonotonicClock;
use crate::config::units::{Microseconds, Rpm};
use crate::config::{validate_pins, DEFAULT_SETTLE_DELAY};
use crate::error::{ConfigError, MotorError, Result};
use crate::gpio::{OutputConfig, PinBank, PinId};

use super::phase::WireMode;
use super::position::{Direction, StepPosition};

/// Integration marker reported by [`StepperDriver::version`].
pub const DRIVER_VERSION: u32 = 1;

/// Phase-sequencing driver for one 2, 4 or 5 wire stepper motor.
///
/// Generic over:
/// - `P`: control pin type (must implement `OutputPin`)
/// - `CLK`: time source for step spacing (must implement `MonotonicClock`)
/// - `DELAY`: provider for the post-phase settle delay (must implement `DelayNs`)
///
/// The driver owns its pins. Dropping it drives every pin LOW so the coils
/// are left de-energised; use [`release`](Self::release) to get the pins
/// back instead.
pub struct StepperDriver<P, CLK, DELAY>
where
    P: OutputPin,
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    /// Control pins in phase-table order.
    pins: Vec<P, 5>,

    /// Wiring variant, fixed at construction.
    mode: WireMode,

    /// Time source for step spacing.
    clock: CLK,

    /// Delay provider for the settle delay.
    delay: DELAY,

    /// Step index within the revolution.
    position: StepPosition,

    /// Direction of the last move.
    direction: Direction,

    /// Minimum spacing between steps; `None` until a speed is set.
    step_delay_us: Option<u32>,

    /// Clock reading at the last phase change.
    last_step_micros: u64,

    /// Pause after each phase change.
    settle_delay_us: u32,

    /// Motor name for logging/debugging.
    name: String<32>,
}

impl<P, CLK, DELAY> StepperDriver<P, CLK, DELAY>
where
    P: OutputPin,
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    /// Create a driver for a two-wire motor.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn two_wire<B>(
        steps_per_revolution: u32,
        pins: [PinId; 2],
        bank: &mut B,
        clock: CLK,
        delay: DELAY,
    ) -> Result<Self>
    where
        B: PinBank<Pin = P>,
    {
        Self::new(steps_per_revolution, &pins, bank, clock, delay)
    }

    /// Create a driver for a four-wire motor.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn four_wire<B>(
        steps_per_revolution: u32,
        pins: [PinId; 4],
        bank: &mut B,
        clock: CLK,
        delay: DELAY,
    ) -> Result<Self>
    where
        B: PinBank<Pin = P>,
    {
        Self::new(steps_per_revolution, &pins, bank, clock, delay)
    }

    /// Create a driver for a five-phase, five-wire motor.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn five_wire<B>(
        steps_per_revolution: u32,
        pins: [PinId; 5],
        bank: &mut B,
        clock: CLK,
        delay: DELAY,
    ) -> Result<Self>
    where
        B: PinBank<Pin = P>,
    {
        Self::new(steps_per_revolution, &pins, bank, clock, delay)
    }

    /// Create a driver, picking the wiring variant from the number of pins.
    ///
    /// Every identifier is checked against the bank before the first pin is
    /// configured, so a rejected pin list leaves the hardware untouched. Pins
    /// are configured as plain outputs: no pull resistors, no interrupts.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidStepsPerRevolution` if `steps_per_revolution` is 0
    /// - `ConfigError::InvalidWireCount` unless 2, 4 or 5 pins are given
    /// - `ConfigError::InvalidPin` / `DuplicatePin` for a bad pin list
    /// - `MotorError::PinConfiguration` if the platform refuses a pin
    pub fn new<B>(
        steps_per_revolution: u32,
        pins: &[PinId],
        bank: &mut B,
        clock: CLK,
        delay: DELAY,
    ) -> Result<Self>
    where
        B: PinBank<Pin = P>,
    {
        let position = StepPosition::new(steps_per_revolution)
            .ok_or(ConfigError::InvalidStepsPerRevolution(steps_per_revolution))?;

        let mode = validate_pins(pins, bank.output_pins()).map_err(|e| {
            warn!("rejected pin list of {} pins", pins.len());
            e
        })?;

        let mut outputs = Vec::new();
        for &id in pins {
            let pin = bank
                .configure_output(id, OutputConfig::default())
                .map_err(|_| MotorError::PinConfiguration(id))?;
            // Validation capped the list at five pins
            let _ = outputs.push(pin);
        }

        debug!(
            "configured {}-wire motor, {} steps/rev",
            mode.wire_count(),
            steps_per_revolution
        );

        Ok(Self {
            pins: outputs,
            mode,
            clock,
            delay,
            position,
            direction: Direction::Forward,
            step_delay_us: None,
            last_step_micros: 0,
            settle_delay_us: DEFAULT_SETTLE_DELAY.value(),
            name: String::try_from("motor").unwrap_or_default(),
        })
    }

    /// Integration marker of this driver implementation.
    #[inline]
    pub const fn version() -> u32 {
        DRIVER_VERSION
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the wiring variant.
    #[inline]
    pub fn wire_mode(&self) -> WireMode {
        self.mode
    }

    /// Get steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.position.steps_per_revolution()
    }

    /// Current step index in `0..steps_per_revolution`.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.position.index()
    }

    /// Row of the phase table currently applied to the pins.
    #[inline]
    pub fn phase_index(&self) -> u32 {
        self.position.phase(self.mode)
    }

    /// Direction of the last non-zero move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Spacing between steps, or `None` if no speed has been set yet.
    #[inline]
    pub fn step_delay_us(&self) -> Option<u32> {
        self.step_delay_us
    }

    /// Clock reading at the last phase change (0 before the first step).
    #[inline]
    pub fn last_step_micros(&self) -> u64 {
        self.last_step_micros
    }

    /// Pause applied after each phase change.
    #[inline]
    pub fn settle_delay_us(&self) -> u32 {
        self.settle_delay_us
    }

    /// Change the pause applied after each phase change; zero disables it.
    #[inline]
    pub fn set_settle_delay(&mut self, delay: Microseconds) {
        self.settle_delay_us = delay.value();
    }

    pub(crate) fn set_name(&mut self, name: String<32>) {
        self.name = name;
    }

    /// Set the speed in revolutions per minute.
    ///
    /// The step delay becomes `60_000_000 / (steps_per_revolution * rpm)`
    /// microseconds, truncated, so the motor runs slightly fast when the
    /// division is not exact. Very high speeds truncate to a zero delay, in
    /// which case steps are emitted as fast as the clock can be polled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSpeed` for 0 rpm; the previous delay is
    /// kept.
    pub fn set_speed(&mut self, rpm: Rpm) -> Result<()> {
        let interval = rpm
            .step_interval(self.position.steps_per_revolution())
            .ok_or(ConfigError::InvalidSpeed(rpm.value()))?;

        self.step_delay_us = Some(interval.value());
        debug!("{}: step delay now {} us", self.name.as_str(), interval.value());
        Ok(())
    }

    /// Move `steps_to_move` steps; negative values turn backward.
    ///
    /// Blocks the calling thread until every step has been emitted, busy
    /// polling the clock between steps. Each phase change happens at least
    /// the step delay after the previous one. A zero count returns at once
    /// without touching the pins, the direction or the timestamp.
    ///
    /// Call [`set_speed`](Self::set_speed) first: without it there is no
    /// spacing between steps at all.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a pin write fails. Steps already
    /// emitted stay reflected in [`current_step`](Self::current_step).
    pub fn step(&mut self, steps_to_move: i64) -> Result<()> {
        if steps_to_move == 0 {
            return Ok(());
        }

        self.direction = Direction::from_steps(steps_to_move);

        let step_delay = match self.step_delay_us {
            Some(delay) => delay,
            None => {
                warn!("{}: stepping before a speed was set", self.name.as_str());
                0
            }
        };

        debug!("{}: moving {} steps", self.name.as_str(), steps_to_move);

        for _ in 0..steps_to_move.unsigned_abs() {
            self.wait_for_step(step_delay);
            self.position.advance(self.direction);
            self.write_phase(self.position.phase(self.mode))?;
        }

        Ok(())
    }

    /// Drive every pin LOW, releasing holding torque.
    ///
    /// The step index is kept, so the next step resumes the sequence.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a pin write fails.
    pub fn de_energize(&mut self) -> Result<()> {
        for pin in self.pins.iter_mut() {
            pin.set_low().map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }

    /// De-energise the motor and hand the pins back.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a pin write fails; the driver is
    /// dropped and its remaining pins are driven LOW on a best-effort basis.
    pub fn release(mut self) -> Result<Vec<P, 5>> {
        self.de_energize()?;
        Ok(core::mem::take(&mut self.pins))
    }

    /// Spin until the step delay has elapsed, then stamp the step time.
    fn wait_for_step(&mut self, step_delay: u32) {
        loop {
            let now = self.clock.now_micros();
            if now.saturating_sub(self.last_step_micros) >= u64::from(step_delay) {
                self.last_step_micros = now;
                return;
            }
            core::hint::spin_loop();
        }
    }

    /// Apply one row of the phase table, then let the coils settle.
    fn write_phase(&mut self, phase: u32) -> Result<()> {
        trace!("{}: phase {}", self.name.as_str(), phase);

        let levels = self.mode.levels(phase);
        for (pin, &high) in self.pins.iter_mut().zip(levels) {
            pin.set_state(PinState::from(high))
                .map_err(|_| MotorError::PinError)?;
        }

        if self.settle_delay_us > 0 {
            self.delay.delay_us(self.settle_delay_us);
        }
        Ok(())
    }
}

impl<P, CLK, DELAY> Drop for StepperDriver<P, CLK, DELAY>
where
    P: OutputPin,
    CLK: MonotonicClock,
    DELAY: DelayNs,
{
    fn drop(&mut self) {
        for pin in self.pins.iter_mut() {
            let _ = pin.set_low();
        }
    }
}
