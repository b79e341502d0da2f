// ============================================================================
// Unit Registry
// Dimension families and the enumerable view of the unit catalog
// ============================================================================

use super::catalog::ALL;
use crate::dimension::DimensionVector;
use crate::numeric::Quantity;
use std::fmt;

/// Physical family a catalog unit belongs to.
///
/// Every family fixes a dimension vector; all units of a family share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    Dimensionless,
    Time,
    Length,
    Mass,
    Current,
    TemperatureDelta,
    Amount,
    LuminousIntensity,
    Frequency,
    Force,
    Pressure,
    Energy,
    Power,
    Area,
    Volume,
    Charge,
    Voltage,
    Velocity,
    Acceleration,
}

impl UnitFamily {
    /// Dimension vector shared by every unit in this family.
    pub const fn dimensions(self) -> DimensionVector {
        match self {
            UnitFamily::Dimensionless => DimensionVector::UNITLESS,
            UnitFamily::Time => DimensionVector::TIME,
            UnitFamily::Length => DimensionVector::LENGTH,
            UnitFamily::Mass => DimensionVector::MASS,
            UnitFamily::Current => DimensionVector::CURRENT,
            UnitFamily::TemperatureDelta => DimensionVector::TEMPERATURE,
            UnitFamily::Amount => DimensionVector::MOLE,
            UnitFamily::LuminousIntensity => DimensionVector::INTENSITY,
            UnitFamily::Frequency => DimensionVector::new(-1, 0, 0, 0, 0, 0, 0),
            UnitFamily::Force => DimensionVector::new(-2, 1, 1, 0, 0, 0, 0),
            UnitFamily::Pressure => DimensionVector::new(-2, -1, 1, 0, 0, 0, 0),
            UnitFamily::Energy => DimensionVector::new(-2, 2, 1, 0, 0, 0, 0),
            UnitFamily::Power => DimensionVector::new(-3, 2, 1, 0, 0, 0, 0),
            UnitFamily::Area => DimensionVector::new(0, 2, 0, 0, 0, 0, 0),
            UnitFamily::Volume => DimensionVector::new(0, 3, 0, 0, 0, 0, 0),
            UnitFamily::Charge => DimensionVector::new(1, 0, 0, 1, 0, 0, 0),
            UnitFamily::Voltage => DimensionVector::new(-3, 2, 1, -1, 0, 0, 0),
            UnitFamily::Velocity => DimensionVector::new(-1, 1, 0, 0, 0, 0, 0),
            UnitFamily::Acceleration => DimensionVector::new(-2, 1, 0, 0, 0, 0, 0),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A named catalog constant.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    /// Constant name, e.g. `KILOMETER_PER_HOUR`
    pub name: &'static str,
    pub family: UnitFamily,
    /// One of this unit, in SI base units
    pub quantity: Quantity,
}

impl UnitEntry {
    /// Conversion factor into SI base units.
    #[inline]
    pub const fn factor(&self) -> f64 {
        self.quantity.magnitude()
    }
}

/// Look up a catalog entry by constant name, ignoring ASCII case.
///
/// This is an exact name match over the fixed table, not a unit-expression
/// parser: `"kilometer_per_hour"` resolves, `"km/h"` does not.
pub fn by_name(name: &str) -> Option<&'static UnitEntry> {
    ALL.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// All catalog entries of one family, in declaration order.
pub fn family(family: UnitFamily) -> impl Iterator<Item = &'static UnitEntry> {
    ALL.iter().filter(move |e| e.family == family)
}
