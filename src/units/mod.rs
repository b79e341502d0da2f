// ============================================================================
// Units Module
// Fixed catalog of named units for constructing and converting quantities
// ============================================================================
//
// Every constant is "one unit of X" with an absolute conversion factor into
// SI base units; no entry refers to another at use time.
//
// Usage:
// ```ignore
// use si_quantity::units::{KILOMETER_PER_HOUR, METER};
//
// let d = 2.0 * METER;
// let v = 90.0 * KILOMETER_PER_HOUR;   // 25 m/s
// let t = d / v;                       // 0.08 s
// ```

mod catalog;
mod registry;

pub use catalog::*;
pub use registry::{by_name, family, UnitEntry, UnitFamily};
