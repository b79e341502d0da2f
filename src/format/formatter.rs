// ============================================================================
// Unit Formatter
// Renders dimension vectors as `<symbol>^<exponent>` suffix strings
// ============================================================================

use super::config::FormatConfig;
use crate::dimension::{BaseDimension, DimensionVector};
use crate::numeric::Quantity;
use arrayvec::ArrayVec;
use std::fmt::{self, Write};

static SI_CONFIG: FormatConfig = FormatConfig::SI;

/// A single nonzero `<symbol>^<exponent>` term of a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixTerm {
    pub dimension: BaseDimension,
    pub exponent: i32,
}

/// Renders unit suffixes using a borrowed [`FormatConfig`].
///
/// Terms appear in canonical order (time, length, mass, current,
/// temperature, mole, intensity). Zero exponents are omitted, so a unitless
/// vector renders as the empty string.
///
/// # Example
/// ```
/// use si_quantity::format::UnitFormatter;
/// use si_quantity::units::NEWTON;
///
/// let formatter = UnitFormatter::si();
/// assert_eq!(formatter.suffix(&NEWTON.dimensions()), "s^-2*m^1*kg^1");
/// assert_eq!(formatter.format(&(2.5 * NEWTON)), "2.5s^-2*m^1*kg^1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitFormatter<'a> {
    config: &'a FormatConfig,
}

impl<'a> UnitFormatter<'a> {
    pub fn new(config: &'a FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a FormatConfig {
        self.config
    }

    /// Nonzero terms in canonical order. There are never more than seven.
    pub fn terms(dims: &DimensionVector) -> ArrayVec<SuffixTerm, { BaseDimension::COUNT }> {
        dims.iter()
            .filter(|(_, exponent)| *exponent != 0)
            .map(|(dimension, exponent)| SuffixTerm {
                dimension,
                exponent,
            })
            .collect()
    }

    /// Write the suffix for `dims` into any `fmt::Write` sink.
    pub fn write_suffix<W: Write>(&self, out: &mut W, dims: &DimensionVector) -> fmt::Result {
        for (i, term) in Self::terms(dims).iter().enumerate() {
            if i > 0 {
                out.write_str(&self.config.separator)?;
            }
            write!(
                out,
                "{}{}{}",
                self.config.symbol(term.dimension),
                self.config.exponent_marker,
                term.exponent
            )?;
        }
        Ok(())
    }

    /// Suffix string for `dims`; empty when unitless.
    pub fn suffix(&self, dims: &DimensionVector) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_suffix(&mut out, dims);
        out
    }

    /// Full display form `<magnitude><suffix>`.
    pub fn format(&self, quantity: &Quantity) -> String {
        let mut out = String::new();
        let _ = self.write_quantity(&mut out, quantity);
        out
    }

    pub fn write_quantity<W: Write>(&self, out: &mut W, quantity: &Quantity) -> fmt::Result {
        self.write_quantity_with_precision(out, quantity, None)
    }

    /// Like [`write_quantity`](Self::write_quantity), with the magnitude
    /// rounded to `precision` decimal places when given.
    pub fn write_quantity_with_precision<W: Write>(
        &self,
        out: &mut W,
        quantity: &Quantity,
        precision: Option<usize>,
    ) -> fmt::Result {
        match precision {
            Some(p) => write!(out, "{:.*}", p, quantity.magnitude())?,
            None => write!(out, "{}", quantity.magnitude())?,
        }
        self.write_suffix(out, &quantity.dimensions())
    }
}

impl UnitFormatter<'static> {
    /// Formatter using [`FormatConfig::SI`].
    pub fn si() -> Self {
        Self::new(&SI_CONFIG)
    }
}

impl Default for UnitFormatter<'static> {
    fn default() -> Self {
        Self::si()
    }
}
