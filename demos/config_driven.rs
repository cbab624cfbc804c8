//! Example: Configuration-driven motor setup on the host.
//!
//! This example demonstrates how to:
//! - Parse and validate a motor configuration from TOML
//! - Build drivers by name through the builder
//! - Watch the phase sequence a move produces
//!
//! Run with: `cargo run --example config_driven`

use std::cell::RefCell;
use std::rc::Rc;

use wire_stepper::{
    config::parse_config,
    error::{Error, Result},
    OutputConfig, PinBank, PinId, PinMap, StdClock, StepperDriverBuilder,
};

/// Shared view of the simulated GPIO output register.
type Levels = Rc<RefCell<u64>>;

/// Simulated output pin writing into the shared register.
struct SimPin {
    id: PinId,
    levels: Levels,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        *self.levels.borrow_mut() &= !(1u64 << self.id.value());
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        *self.levels.borrow_mut() |= 1u64 << self.id.value();
        Ok(())
    }
}

/// Simulated ESP32 GPIO bank.
struct SimBank {
    map: PinMap,
    levels: Levels,
}

impl PinBank for SimBank {
    type Pin = SimPin;
    type Error = core::convert::Infallible;

    fn output_pins(&self) -> &PinMap {
        &self.map
    }

    fn configure_output(
        &mut self,
        pin: PinId,
        _config: OutputConfig,
    ) -> core::result::Result<SimPin, Self::Error> {
        Ok(SimPin {
            id: pin,
            levels: self.levels.clone(),
        })
    }
}

/// Settle delay that really sleeps.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

fn show(levels: &Levels, pins: &[u8]) -> String {
    let levels = *levels.borrow();
    pins.iter()
        .map(|pin| if levels & (1u64 << pin) != 0 { '1' } else { '0' })
        .collect()
}

fn main() -> Result<()> {
    println!("=== Configuration-Driven Motor Example ===\n");

    let toml_content = r#"
[platform]
name = "esp32"

[motors.pour]
name = "Pour Arm"
steps_per_revolution = 200
pins = [16, 17, 18, 19]
speed_rpm = 60

[motors.valve]
name = "Valve"
steps_per_revolution = 48
pins = [21, 22]
speed_rpm = 120
settle_delay_us = 0
"#;

    let config = parse_config(toml_content)?;
    println!("Motors: {:?}\n", config.motor_names().collect::<Vec<_>>());

    let levels = Levels::default();
    let mut bank = SimBank {
        map: config.platform.output_pins,
        levels: levels.clone(),
    };

    let mut pour = StepperDriverBuilder::new()
        .clock(StdClock::new())
        .delay(SleepDelay)
        .from_config(&config, "pour")?
        .build(&mut bank)?;

    println!(
        "{}: {:?}, step delay {:?} us",
        pour.name(),
        pour.wire_mode(),
        pour.step_delay_us()
    );
    for _ in 0..8 {
        pour.step(1)?;
        println!(
            "  step {:3}  phase {}  GPIO16-19 {}",
            pour.current_step(),
            pour.phase_index(),
            show(&levels, &[16, 17, 18, 19])
        );
    }
    pour.step(-8)?;
    println!("  back to step {}\n", pour.current_step());

    let mut valve = StepperDriverBuilder::new()
        .clock(StdClock::new())
        .delay(SleepDelay)
        .from_config(&config, "valve")?
        .build(&mut bank)?;

    valve.step(-4)?;
    println!(
        "{}: step {}, GPIO21-22 {}",
        valve.name(),
        valve.current_step(),
        show(&levels, &[21, 22])
    );

    // Releasing de-energises the coils
    let _pins = pour.release()?;
    drop(valve);
    println!("\nAll coils off: {}", *levels.borrow() == 0);

    // A motor on an input-only pin never gets built
    let bad = parse_config(
        r#"
[motors.sensor_side]
name = "Bad"
steps_per_revolution = 200
pins = [32, 33, 34, 35]
"#,
    );
    if let Err(Error::Config(e)) = bad {
        println!("Rejected config: {}", e);
    }

    Ok(())
}
