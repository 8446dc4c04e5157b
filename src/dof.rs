//! Degree-of-freedom model: which movement axes the control permits.
//!
//! A closed set of four variants with explicit union/intersection helpers;
//! the `BitOr`/`BitAnd` operators delegate to those. Exactly four
//! combinations are meaningful, and any other bit pattern collapses to
//! [`DegreeOfFreedom::All`].

use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Movement axes currently allowed for the joystick handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeOfFreedom {
    /// Handle is locked in place; the control is effectively disabled.
    None,
    /// Handle moves along the X axis only.
    #[serde(rename = "x")]
    XOnly,
    /// Handle moves along the Y axis only.
    #[serde(rename = "y")]
    YOnly,
    /// Free movement within the travel circle.
    #[default]
    All,
}

impl DegreeOfFreedom {
    const X_BIT: u8 = 0b01;
    const Y_BIT: u8 = 0b10;

    /// Axis bits for this variant (`X = 0b01`, `Y = 0b10`).
    pub const fn bits(self) -> u8 {
        match self {
            DegreeOfFreedom::None => 0,
            DegreeOfFreedom::XOnly => Self::X_BIT,
            DegreeOfFreedom::YOnly => Self::Y_BIT,
            DegreeOfFreedom::All => Self::X_BIT | Self::Y_BIT,
        }
    }

    /// Reconstruct a variant from axis bits.
    ///
    /// Bit patterns outside the four defined combinations are treated as
    /// [`DegreeOfFreedom::All`] and logged; they indicate a caller bug, not
    /// a state this type can hold.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => DegreeOfFreedom::None,
            0b01 => DegreeOfFreedom::XOnly,
            0b10 => DegreeOfFreedom::YOnly,
            0b11 => DegreeOfFreedom::All,
            other => {
                warn!("Unknown degree-of-freedom bits {:#04b}, treating as all axes", other);
                DegreeOfFreedom::All
            },
        }
    }

    /// Axes allowed by either operand (`None ∪ All = All`).
    pub fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }

    /// Axes allowed by both operands (`XOnly ∩ YOnly = None`).
    pub fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits() & other.bits())
    }

    /// Whether movement along the X axis is allowed.
    pub const fn allows_x(self) -> bool {
        self.bits() & Self::X_BIT != 0
    }

    /// Whether movement along the Y axis is allowed.
    pub const fn allows_y(self) -> bool {
        self.bits() & Self::Y_BIT != 0
    }
}

impl BitOr for DegreeOfFreedom {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DegreeOfFreedom {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}
