//! Step index tracking within one revolution.

use super::phase::WireMode;

/// Direction of motor rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing step index (positive step count).
    #[default]
    Forward,
    /// Decreasing step index (negative step count).
    Backward,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Step index within one revolution.
///
/// The index always lies in `0..steps_per_revolution` and wraps in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition {
    /// Current step index.
    index: u32,
    /// Steps in one full revolution, never zero.
    steps_per_revolution: u32,
}

impl StepPosition {
    /// Create a tracker at index 0.
    ///
    /// Returns `None` if `steps_per_revolution` is zero.
    #[inline]
    pub fn new(steps_per_revolution: u32) -> Option<Self> {
        if steps_per_revolution == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            steps_per_revolution,
        })
    }

    /// Current step index.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Steps in one full revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Move one step, wrapping at either end of the revolution.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        self.index = match direction {
            Direction::Forward => {
                if self.index + 1 == self.steps_per_revolution {
                    0
                } else {
                    self.index + 1
                }
            }
            Direction::Backward => {
                if self.index == 0 {
                    self.steps_per_revolution - 1
                } else {
                    self.index - 1
                }
            }
        };
    }

    /// Row of the phase table for the current index.
    #[inline]
    pub fn phase(&self, mode: WireMode) -> u32 {
        self.index % mode.phase_count()
    }
}
