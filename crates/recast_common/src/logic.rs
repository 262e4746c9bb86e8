//! Four-state bit values as they appear in sized HDL constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single four-state bit.
///
/// The four states represent:
/// - `Zero`: driven low
/// - `One`: driven high
/// - `X`: undefined
/// - `Z`: floating (high impedance)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
    /// Undefined.
    X = 2,
    /// Floating.
    Z = 3,
}

impl Logic {
    /// Combines the three bit-state planes of one bit position into a value.
    ///
    /// Precedence is strict: an undefined bit wins over a floating bit, which
    /// wins over a defined one, which wins over a defined zero.
    pub fn from_planes(value: bool, x: bool, z: bool) -> Self {
        if x {
            Logic::X
        } else if z {
            Logic::Z
        } else if value {
            Logic::One
        } else {
            Logic::Zero
        }
    }

    /// Returns the character used for this bit in a binary-based literal.
    pub fn as_char(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'x',
            Logic::Z => 'z',
        }
    }

    /// Converts a literal digit to a [`Logic`] value.
    ///
    /// Accepts '0', '1', 'x'/'X', and 'z'/'Z'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::X),
            'z' | 'Z' => Some(Logic::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
