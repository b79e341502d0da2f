// ============================================================================
// Unit Catalog
// Named compile-time constants: one unit of X expressed in SI base units
// ============================================================================

use super::registry::{UnitEntry, UnitFamily};
use crate::numeric::Quantity;
use std::f64::consts::{PI, TAU};

/// One unit of `family` worth `factor` SI base units.
const fn unit(factor: f64, family: UnitFamily) -> Quantity {
    Quantity::with_dimensions(factor, family.dimensions())
}

/// Declares each constant and lists it in [`ALL`] in a single place, so the
/// enumerable table cannot drift from the constants.
macro_rules! catalog {
    ($(
        $family:ident {
            $( $(#[$meta:meta])* $name:ident = $factor:expr; )*
        }
    )*) => {
        $( $(
            $(#[$meta])*
            pub const $name: Quantity = unit($factor, UnitFamily::$family);
        )* )*

        /// Every catalog constant with its name and family, in declaration
        /// order.
        pub static ALL: &[UnitEntry] = &[
            $( $(
                UnitEntry {
                    name: stringify!($name),
                    family: UnitFamily::$family,
                    quantity: $name,
                },
            )* )*
        ];
    };
}

catalog! {
    Dimensionless {
        /// Plain number
        UNITLESS = 1.0;
        RADIAN = 1.0;
        DEGREE = PI / 180.0;
        REVOLUTION = TAU;
    }

    Time {
        /// SI base unit of time
        SECOND = 1.0;
        MILLISECOND = 1e-3;
        MICROSECOND = 1e-6;
        NANOSECOND = 1e-9;
        MINUTE = 60.0;
        HOUR = 3_600.0;
        DAY = 86_400.0;
        WEEK = 604_800.0;
    }

    Length {
        /// SI base unit of length
        METER = 1.0;
        KILOMETER = 1_000.0;
        CENTIMETER = 1e-2;
        MILLIMETER = 1e-3;
        MICROMETER = 1e-6;
        NANOMETER = 1e-9;
        /// International inch, exactly 0.0254 m
        INCH = 0.0254;
        FOOT = 0.3048;
        YARD = 0.9144;
        /// International (statute) mile
        MILE = 1_609.344;
        NAUTICAL_MILE = 1_852.0;
    }

    Mass {
        /// SI base unit of mass
        KILOGRAM = 1.0;
        GRAM = 1e-3;
        MILLIGRAM = 1e-6;
        TONNE = 1_000.0;
        /// Avoirdupois pound, exactly 0.45359237 kg
        POUND = 0.453_592_37;
        OUNCE = 0.028_349_523_125;
    }

    Current {
        /// SI base unit of electric current
        AMPERE = 1.0;
        /// Alias of [`AMPERE`]
        AMP = 1.0;
        MILLIAMPERE = 1e-3;
    }

    TemperatureDelta {
        /// Temperature difference of one kelvin
        DELTA_KELVIN = 1.0;
        DELTA_CELSIUS = 1.0;
        DELTA_FAHRENHEIT = 5.0 / 9.0;
    }

    Amount {
        /// SI base unit of amount of substance
        MOLE = 1.0;
        MILLIMOLE = 1e-3;
    }

    LuminousIntensity {
        /// SI base unit of luminous intensity
        CANDELA = 1.0;
    }

    Frequency {
        HERTZ = 1.0;
        KILOHERTZ = 1e3;
        MEGAHERTZ = 1e6;
        /// Revolutions per minute; one revolution is 2π, see [`REVOLUTION`]
        RPM = TAU / 60.0;
    }

    Force {
        NEWTON = 1.0;
        KILONEWTON = 1e3;
        POUND_FORCE = 4.448_221_615_260_5;
    }

    Pressure {
        PASCAL = 1.0;
        KILOPASCAL = 1e3;
        BAR = 1e5;
        /// Standard atmosphere
        ATMOSPHERE = 101_325.0;
        PSI = 6_894.757_293_168_361;
    }

    Energy {
        JOULE = 1.0;
        KILOJOULE = 1e3;
        /// Thermochemical calorie
        CALORIE = 4.184;
        KILOWATT_HOUR = 3.6e6;
        ELECTRONVOLT = 1.602_176_634e-19;
    }

    Power {
        WATT = 1.0;
        KILOWATT = 1e3;
        /// Mechanical horsepower
        HORSEPOWER = 745.699_871_582_270_2;
    }

    Area {
        METER_SQUARED = 1.0;
        CENTIMETER_SQUARED = 1e-4;
        HECTARE = 1e4;
        ACRE = 4_046.856_422_4;
    }

    Volume {
        METER_CUBED = 1.0;
        LITER = 1e-3;
        MILLILITER = 1e-6;
        US_GALLON = 3.785_411_784e-3;
    }

    Charge {
        COULOMB = 1.0;
        AMPERE_HOUR = 3_600.0;
    }

    Voltage {
        VOLT = 1.0;
        MILLIVOLT = 1e-3;
        KILOVOLT = 1e3;
    }

    Velocity {
        METER_PER_SECOND = 1.0;
        KILOMETER_PER_HOUR = 1_000.0 / 3_600.0;
        MILE_PER_HOUR = 1_609.344 / 3_600.0;
        KNOT = 1_852.0 / 3_600.0;
        FOOT_PER_SECOND = 0.3048;
    }

    Acceleration {
        METER_PER_SECOND_SQUARED = 1.0;
        /// Standard acceleration of gravity, g₀
        STANDARD_GRAVITY = 9.806_65;
    }
}
