// ============================================================================
// Dimension Module
// Dimension-vector algebra over the SI base dimensions
// ============================================================================
//
// This module provides:
// - BaseDimension: the seven SI base dimensions in canonical order
// - DimensionVector: integer exponents over those dimensions
//
// Combination rules:
// - product   -> exponents add
// - quotient  -> exponents subtract
// - reciprocal -> exponents negate
// - integer power n -> exponents scale by n

mod base;
mod vector;

pub use base::BaseDimension;
pub use vector::DimensionVector;
