// ============================================================================
// Base Dimensions
// The seven SI base dimensions in their fixed canonical order
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven SI base dimensions.
///
/// The declaration order is the canonical order used everywhere in the crate:
/// exponent storage, iteration and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseDimension {
    /// Time (second, s)
    Time,
    /// Length (meter, m)
    Length,
    /// Mass (kilogram, kg)
    Mass,
    /// Electric current (ampere, A)
    Current,
    /// Thermodynamic temperature (kelvin, K)
    Temperature,
    /// Amount of substance (mole, mol)
    Mole,
    /// Luminous intensity (candela, cd)
    Intensity,
}

impl BaseDimension {
    /// Number of base dimensions.
    pub const COUNT: usize = 7;

    /// All base dimensions in canonical order.
    pub const ALL: [BaseDimension; Self::COUNT] = [
        BaseDimension::Time,
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Mole,
        BaseDimension::Intensity,
    ];

    /// Position of this dimension in the canonical order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit for this dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Time => "s",
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Mole => "mol",
            BaseDimension::Intensity => "cd",
        }
    }

    /// Lower-case name of the dimension.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Time => "time",
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Mole => "mole",
            BaseDimension::Intensity => "intensity",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        for (i, dim) in BaseDimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
        assert_eq!(BaseDimension::ALL[0], BaseDimension::Time);
        assert_eq!(BaseDimension::ALL[6], BaseDimension::Intensity);
    }

    #[test]
    fn test_symbols() {
        let symbols: Vec<&str> = BaseDimension::ALL.iter().map(|d| d.symbol()).collect();
        assert_eq!(symbols, vec!["s", "m", "kg", "A", "K", "mol", "cd"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(BaseDimension::Temperature.to_string(), "temperature");
    }
}
