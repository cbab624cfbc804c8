//! Wiring variants and their phase truth tables.
//!
//! Each table row lists the level of every control wire, in pin order, for
//! one phase (`true` = HIGH = energised).
//!
//! ```text
//! 2-wire      4-wire          5-wire
//! ph C0 C1    ph C0 C1 C2 C3  ph C0 C1 C2 C3 C4
//!  0  0  1     0  1  0  1  0   0  0  1  1  0  1
//!  1  1  1     1  0  1  1  0   1  0  1  0  0  1
//!  2  1  0     2  0  1  0  1   2  0  1  0  1  1
//!  3  0  0     3  1  0  0  1   3  0  1  0  1  0
//!                              4  1  1  0  1  0
//!                              5  1  0  0  1  0
//!                              6  1  0  1  1  0
//!                              7  1  0  1  0  0
//!                              8  1  0  1  0  1
//!                              9  0  0  1  0  1
//! ```
//!
//! The 2-wire table is columns C1 and C2 of the 4-wire one; the driver board
//! supplies the two inverted signals.

const H: bool = true;
const L: bool = false;

const TWO_WIRE: [[bool; 2]; 4] = [[L, H], [H, H], [H, L], [L, L]];

const FOUR_WIRE: [[bool; 4]; 4] = [
    [H, L, H, L],
    [L, H, H, L],
    [L, H, L, H],
    [H, L, L, H],
];

const FIVE_WIRE: [[bool; 5]; 10] = [
    [L, H, H, L, H],
    [L, H, L, L, H],
    [L, H, L, H, H],
    [L, H, L, H, L],
    [H, H, L, H, L],
    [H, L, L, H, L],
    [H, L, H, H, L],
    [H, L, H, L, L],
    [H, L, H, L, H],
    [L, L, H, L, H],
];

/// How the motor is wired to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireMode {
    /// Two control wires, inverted in hardware to drive four coil ends.
    TwoWire,
    /// Four control wires (unipolar or bipolar).
    FourWire,
    /// Five-phase motor with five control wires.
    FiveWire,
}

impl WireMode {
    /// Pick the variant for a number of control wires.
    #[inline]
    pub const fn from_wire_count(wires: usize) -> Option<Self> {
        match wires {
            2 => Some(WireMode::TwoWire),
            4 => Some(WireMode::FourWire),
            5 => Some(WireMode::FiveWire),
            _ => None,
        }
    }

    /// Number of control wires.
    #[inline]
    pub const fn wire_count(self) -> usize {
        match self {
            WireMode::TwoWire => 2,
            WireMode::FourWire => 4,
            WireMode::FiveWire => 5,
        }
    }

    /// Length of the phase cycle.
    #[inline]
    pub const fn phase_count(self) -> u32 {
        match self {
            WireMode::TwoWire | WireMode::FourWire => 4,
            WireMode::FiveWire => 10,
        }
    }

    /// Pin levels for `phase`, taken modulo [`phase_count`](Self::phase_count).
    ///
    /// The returned slice has [`wire_count`](Self::wire_count) entries.
    #[inline]
    pub fn levels(self, phase: u32) -> &'static [bool] {
        let row = (phase % self.phase_count()) as usize;
        match self {
            WireMode::TwoWire => &TWO_WIRE[row],
            WireMode::FourWire => &FOUR_WIRE[row],
            WireMode::FiveWire => &FIVE_WIRE[row],
        }
    }
}
