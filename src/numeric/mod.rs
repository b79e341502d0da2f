// ============================================================================
// Numeric Module
// Dimension-checked quantity arithmetic
// ============================================================================
//
// This module provides:
// - Quantity: f64 magnitude in SI base units + DimensionVector
// - DimensionError: the single failure kind (DimensionMismatch)
// - std::ops implementations over Quantity and raw f64 scalars
//
// Design principles:
// - Fallible operations return Result (no panics)
// - Quantities are immutable Copy values
// - Exact floating-point comparison, no epsilon
// - Equality across dimensions is an error, not `false`

mod errors;
mod ops;
mod quantity;

pub use errors::{DimensionError, Operation, QuantityResult};
pub use quantity::Quantity;
