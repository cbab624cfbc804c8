//! Motor module for wire-stepper.
//!
//! Provides the phase-sequencing stepper driver and its building blocks.

mod builder;
mod driver;
mod phase;
mod position;

pub use builder::StepperDriverBuilder;
pub use driver::{StepperDriver, DRIVER_VERSION};
pub use phase::WireMode;
pub use position::{Direction, StepPosition};
