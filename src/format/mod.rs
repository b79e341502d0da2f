// ============================================================================
// Format Module
// Human-readable rendering of dimensions and quantities
// ============================================================================
//
// This module provides:
// - FormatConfig: symbols, separator and exponent marker (SI by default)
// - UnitFormatter: renders `<symbol>^<exponent>` terms joined by a separator
//
// Display for Quantity and DimensionVector goes through UnitFormatter::si().

mod config;
mod formatter;

pub use config::FormatConfig;
pub use formatter::{SuffixTerm, UnitFormatter};
