// ============================================================================
// SI Quantity Library
// Dimension-checked physical-quantity arithmetic over the SI base dimensions
// ============================================================================

//! # SI Quantity
//!
//! A numeric type that carries a magnitude together with its exponents over
//! the seven SI base dimensions, and checks dimensional consistency on every
//! arithmetic and comparison operation.
//!
//! ## Features
//!
//! - **Runtime dimension vectors** over time, length, mass, current,
//!   temperature, amount of substance and luminous intensity
//! - **Operator overloading** for `Quantity ⊗ Quantity`, `Quantity ⊗ f64` and
//!   `f64 ⊗ Quantity`
//! - **Typed failures**: mismatched dimensions yield
//!   [`DimensionError::DimensionMismatch`](numeric::DimensionError), never a panic
//! - **Compile-time unit catalog** of SI, imperial and derived units
//! - **Configurable formatting** of unit suffixes (`5m^1`, `9.8s^-2*m^1`)
//!
//! ## Example
//!
//! ```rust
//! use si_quantity::prelude::*;
//!
//! let a = 2.0 * METER;
//! let b = 3.0 * METER;
//!
//! let sum = (a + b)?;
//! assert_eq!(sum.to_string(), "5m^1");
//!
//! let area = a * b;
//! assert!(area.try_eq(&(6.0 * METER_SQUARED))?);
//!
//! // Adding a length to a time is caught
//! assert!((a + 3.0 * SECOND).is_err());
//! # Ok::<(), si_quantity::numeric::DimensionError>(())
//! ```

pub mod dimension;
pub mod format;
pub mod numeric;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::dimension::{BaseDimension, DimensionVector};
    pub use crate::format::{FormatConfig, UnitFormatter};
    pub use crate::numeric::{DimensionError, Operation, Quantity, QuantityResult};
    pub use crate::units::*;
}
