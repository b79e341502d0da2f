// ============================================================================
// Format Configuration
// Symbols and separators used when rendering unit suffixes
// ============================================================================

use crate::dimension::BaseDimension;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`UnitFormatter`](super::UnitFormatter).
///
/// The default is [`FormatConfig::SI`], which renders `5 m/s` as
/// `5s^-1*m^1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Symbol for each base dimension, in canonical order
    pub symbols: [Cow<'static, str>; BaseDimension::COUNT],

    /// Placed between consecutive `<symbol>^<exponent>` terms
    pub separator: Cow<'static, str>,

    /// Placed between a symbol and its exponent
    pub exponent_marker: Cow<'static, str>,
}

impl FormatConfig {
    /// SI base-unit symbols, `*` between terms and `^` before exponents.
    pub const SI: Self = Self {
        symbols: [
            Cow::Borrowed(BaseDimension::Time.symbol()),
            Cow::Borrowed(BaseDimension::Length.symbol()),
            Cow::Borrowed(BaseDimension::Mass.symbol()),
            Cow::Borrowed(BaseDimension::Current.symbol()),
            Cow::Borrowed(BaseDimension::Temperature.symbol()),
            Cow::Borrowed(BaseDimension::Mole.symbol()),
            Cow::Borrowed(BaseDimension::Intensity.symbol()),
        ],
        separator: Cow::Borrowed("*"),
        exponent_marker: Cow::Borrowed("^"),
    };

    /// Same as [`FormatConfig::SI`].
    pub fn si() -> Self {
        Self::SI
    }

    /// SI symbols joined with a middle dot: `s^-1·m^1`.
    pub fn dotted() -> Self {
        Self::SI.with_separator("·")
    }

    /// Builder method: Override the symbol of one base dimension
    pub fn with_symbol(mut self, dim: BaseDimension, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.symbols[dim.index()] = symbol.into();
        self
    }

    /// Builder method: Set the term separator
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: Set the exponent marker
    pub fn with_exponent_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.exponent_marker = marker.into();
        self
    }

    /// Symbol configured for `dim`.
    #[inline]
    pub fn symbol(&self, dim: BaseDimension) -> &str {
        &self.symbols[dim.index()]
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for dim in BaseDimension::ALL {
            let symbol = self.symbol(dim);
            if symbol.is_empty() {
                return Err(format!("Symbol for {} cannot be empty", dim));
            }
            if !self.separator.is_empty() && symbol.contains(&*self.separator) {
                return Err(format!("Symbol for {} contains the separator", dim));
            }
        }

        // Distinct symbols keep the rendered suffix unambiguous
        for (i, a) in self.symbols.iter().enumerate() {
            if self.symbols[i + 1..].iter().any(|b| a == b) {
                return Err(format!("Symbol '{}' is used for more than one dimension", a));
            }
        }

        if self.separator.is_empty() {
            return Err("Separator cannot be empty".to_string());
        }

        if self.exponent_marker.is_empty() {
            return Err("Exponent marker cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::SI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_si() {
        let config = FormatConfig::default();
        assert_eq!(config, FormatConfig::SI);
        assert_eq!(config.symbol(BaseDimension::Mass), "kg");
        assert_eq!(config.separator, "*");
        assert_eq!(config.exponent_marker, "^");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FormatConfig::si()
            .with_symbol(BaseDimension::Temperature, "degK")
            .with_separator(" ")
            .with_exponent_marker("**");

        assert_eq!(config.symbol(BaseDimension::Temperature), "degK");
        assert_eq!(config.separator, " ");
        assert_eq!(config.exponent_marker, "**");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let dotted = FormatConfig::dotted();
        assert_eq!(dotted.separator, "·");
        assert_eq!(dotted.symbols, FormatConfig::SI.symbols);
    }

    #[test]
    fn test_validation() {
        let empty_symbol = FormatConfig::si().with_symbol(BaseDimension::Mole, "");
        assert!(empty_symbol.validate().is_err());

        let duplicate = FormatConfig::si().with_symbol(BaseDimension::Mass, "m");
        assert!(duplicate.validate().is_err());

        let no_separator = FormatConfig::si().with_separator("");
        assert!(no_separator.validate().is_err());

        let no_marker = FormatConfig::si().with_exponent_marker("");
        assert!(no_marker.validate().is_err());

        let clashing = FormatConfig::si().with_symbol(BaseDimension::Length, "m*");
        assert!(clashing.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = FormatConfig::dotted().with_symbol(BaseDimension::Current, "amp");
        let json = serde_json::to_string(&config).unwrap();
        let back: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
