// ============================================================================
// Quantity
// Floating-point magnitude in SI base units paired with a dimension vector
// ============================================================================

use super::errors::{DimensionError, Operation, QuantityResult};
use crate::dimension::DimensionVector;
use crate::format::UnitFormatter;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical quantity: a magnitude in SI base units plus its dimensions.
///
/// Quantities are immutable `Copy` values; every operation returns a new one.
/// Scale factors are folded into the magnitude at construction time, usually
/// by multiplying a raw number with a catalog unit:
///
/// ```
/// use si_quantity::units::{KILOMETER, METER};
///
/// let d = 1.5 * KILOMETER;
/// assert_eq!(d.magnitude(), 1500.0);
/// assert!(d.has_same_units(&METER));
/// ```
///
/// # Equality and ordering
/// `Quantity` does not implement `PartialEq` or `PartialOrd`. Comparing two
/// quantities of different dimensions is an error, not `false`, so equality
/// and ordering go through [`try_eq`](Self::try_eq),
/// [`try_cmp`](Self::try_cmp) and friends, all of which return
/// [`QuantityResult`].
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    magnitude: f64,
    dims: DimensionVector,
}

impl Quantity {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a unitless quantity.
    #[inline]
    pub const fn unitless(magnitude: f64) -> Self {
        Self {
            magnitude,
            dims: DimensionVector::UNITLESS,
        }
    }

    /// Create from a magnitude in SI base units and seven exponents in
    /// canonical order (time, length, mass, current, temperature, mole,
    /// intensity).
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        magnitude: f64,
        time: i32,
        length: i32,
        mass: i32,
        current: i32,
        temperature: i32,
        mole: i32,
        intensity: i32,
    ) -> Self {
        Self {
            magnitude,
            dims: DimensionVector::new(time, length, mass, current, temperature, mole, intensity),
        }
    }

    /// Create with the dimensions of `template` and a new magnitude.
    #[inline]
    pub const fn with_template(magnitude: f64, template: &Quantity) -> Self {
        Self {
            magnitude,
            dims: template.dims,
        }
    }

    #[inline]
    pub const fn with_dimensions(magnitude: f64, dims: DimensionVector) -> Self {
        Self { magnitude, dims }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Magnitude in SI base units.
    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Alias of [`magnitude`](Self::magnitude); the stored value is always
    /// in base units.
    #[inline]
    pub const fn in_base_units(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub const fn dimensions(&self) -> DimensionVector {
        self.dims
    }

    #[inline]
    pub const fn has_same_units(&self, other: &Quantity) -> bool {
        self.dims.equals(&other.dims)
    }

    #[inline]
    pub const fn is_unitless(&self) -> bool {
        self.dims.is_unitless()
    }

    /// Magnitude expressed in `unit`, e.g. metres in kilometres.
    ///
    /// # Errors
    /// `DimensionMismatch` if `unit` has different dimensions.
    pub fn value_in(&self, unit: &Quantity) -> QuantityResult<f64> {
        self.require_same(Operation::Convert, unit)?;
        Ok(self.magnitude / unit.magnitude)
    }

    // ========================================================================
    // Dimension Checks
    // ========================================================================

    #[inline]
    fn require_same(&self, operation: Operation, other: &Quantity) -> QuantityResult<()> {
        if self.has_same_units(other) {
            Ok(())
        } else {
            Err(DimensionError::mismatch(operation, self.dims, other.dims))
        }
    }

    /// Check that this quantity may be combined with a raw scalar.
    #[inline]
    pub(crate) fn require_unitless(&self, operation: Operation) -> QuantityResult<()> {
        if self.is_unitless() {
            Ok(())
        } else {
            Err(DimensionError::mismatch(
                operation,
                self.dims,
                DimensionVector::UNITLESS,
            ))
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    #[inline]
    pub fn checked_add(self, rhs: Quantity) -> QuantityResult<Quantity> {
        self.require_same(Operation::Add, &rhs)?;
        Ok(Self::with_template(self.magnitude + rhs.magnitude, &self))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    #[inline]
    pub fn checked_sub(self, rhs: Quantity) -> QuantityResult<Quantity> {
        self.require_same(Operation::Subtract, &rhs)?;
        Ok(Self::with_template(self.magnitude - rhs.magnitude, &self))
    }

    /// Add a raw scalar; only valid for unitless quantities.
    #[inline]
    pub fn checked_add_scalar(self, rhs: f64) -> QuantityResult<Quantity> {
        self.require_unitless(Operation::Add)?;
        Ok(Self::unitless(self.magnitude + rhs))
    }

    /// Subtract a raw scalar; only valid for unitless quantities.
    #[inline]
    pub fn checked_sub_scalar(self, rhs: f64) -> QuantityResult<Quantity> {
        self.require_unitless(Operation::Subtract)?;
        Ok(Self::unitless(self.magnitude - rhs))
    }

    /// `+a`: a copy with the same magnitude and dimensions.
    #[inline]
    pub const fn unary_plus(self) -> Quantity {
        self
    }

    /// `1 / a`.
    #[inline]
    pub fn recip(self) -> Quantity {
        Self::with_dimensions(1.0 / self.magnitude, self.dims.negate())
    }

    /// Integer power; exponents are multiplied by `n`.
    #[inline]
    pub fn powi(self, n: i32) -> Quantity {
        Self::with_dimensions(self.magnitude.powi(n), self.dims.scale(n))
    }

    #[inline]
    pub fn abs(self) -> Quantity {
        Self::with_template(self.magnitude.abs(), &self)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `a == b`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ. This never returns
    /// `Ok(false)` for incommensurable operands.
    #[inline]
    pub fn try_eq(&self, other: &Quantity) -> QuantityResult<bool> {
        self.require_same(Operation::Equality, other)?;
        Ok(self.magnitude == other.magnitude)
    }

    /// `a != b`, with the same failure rule as [`try_eq`](Self::try_eq).
    #[inline]
    pub fn try_ne(&self, other: &Quantity) -> QuantityResult<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Three-way comparison returning `-1`, `0` or `1`.
    ///
    /// Returns `0` when the magnitudes are equal, `1` when `self` is greater
    /// and `-1` otherwise (including when either magnitude is NaN).
    pub fn compare(&self, other: &Quantity) -> QuantityResult<i32> {
        self.require_same(Operation::Compare, other)?;
        Ok(three_way(self.magnitude, other.magnitude))
    }

    /// [`compare`](Self::compare) as an [`Ordering`].
    pub fn try_cmp(&self, other: &Quantity) -> QuantityResult<Ordering> {
        self.compare(other).map(|c| c.cmp(&0))
    }

    #[inline]
    pub fn try_lt(&self, other: &Quantity) -> QuantityResult<bool> {
        self.require_same(Operation::Compare, other)?;
        Ok(self.magnitude < other.magnitude)
    }

    #[inline]
    pub fn try_le(&self, other: &Quantity) -> QuantityResult<bool> {
        self.require_same(Operation::Compare, other)?;
        Ok(self.magnitude <= other.magnitude)
    }

    #[inline]
    pub fn try_gt(&self, other: &Quantity) -> QuantityResult<bool> {
        self.require_same(Operation::Compare, other)?;
        Ok(self.magnitude > other.magnitude)
    }

    #[inline]
    pub fn try_ge(&self, other: &Quantity) -> QuantityResult<bool> {
        self.require_same(Operation::Compare, other)?;
        Ok(self.magnitude >= other.magnitude)
    }

    /// Equality against a raw scalar; only valid for unitless quantities.
    pub fn try_eq_scalar(&self, other: f64) -> QuantityResult<bool> {
        self.require_unitless(Operation::Equality)?;
        Ok(self.magnitude == other)
    }

    /// Three-way comparison of `self` against a raw scalar.
    pub fn compare_scalar(&self, other: f64) -> QuantityResult<i32> {
        self.require_unitless(Operation::Compare)?;
        Ok(three_way(self.magnitude, other))
    }

    /// Three-way comparison of a raw scalar against `self` (`s <=> a`).
    pub fn compare_scalar_rev(lhs: f64, rhs: &Quantity) -> QuantityResult<i32> {
        rhs.require_unitless(Operation::Compare)?;
        Ok(three_way(lhs, rhs.magnitude))
    }

    /// Returns the smaller of two commensurable quantities.
    pub fn checked_min(self, other: Quantity) -> QuantityResult<Quantity> {
        Ok(if self.try_le(&other)? { self } else { other })
    }

    /// Returns the larger of two commensurable quantities.
    pub fn checked_max(self, other: Quantity) -> QuantityResult<Quantity> {
        Ok(if self.try_ge(&other)? { self } else { other })
    }
}

#[inline]
fn three_way(a: f64, b: f64) -> i32 {
    if a == b {
        0
    } else if a > b {
        1
    } else {
        -1
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?}, {})", self.magnitude, self.dims)
    }
}

/// `<magnitude><suffix>`, e.g. `5m^1`; unitless quantities print the bare
/// magnitude. A precision such as `{:.2}` applies to the magnitude.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        UnitFormatter::si().write_quantity_with_precision(f, self, precision)
    }
}

impl From<f64> for Quantity {
    fn from(magnitude: f64) -> Self {
        Self::unitless(magnitude)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Quantity {
    /// Build `value * unit` from an exact decimal.
    ///
    /// Returns `None` if the decimal cannot be represented as `f64`.
    pub fn from_decimal(value: rust_decimal::Decimal, unit: &Quantity) -> Option<Quantity> {
        use rust_decimal::prelude::ToPrimitive;

        value
            .to_f64()
            .map(|v| Self::with_template(v * unit.magnitude, unit))
    }

    /// Magnitude as a decimal, for display/debugging.
    ///
    /// Returns `None` for NaN, infinities and values out of decimal range.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        rust_decimal::Decimal::from_f64(self.magnitude)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{KILOMETER, METER, MILLISECOND, SECOND, UNITLESS};

    fn mismatch(op: Operation, left: DimensionVector, right: DimensionVector) -> DimensionError {
        DimensionError::DimensionMismatch {
            operation: op,
            left,
            right,
        }
    }

    #[test]
    fn test_constructors() {
        let u = Quantity::unitless(4.0);
        assert!(u.is_unitless());
        assert_eq!(u.magnitude(), 4.0);

        let force = Quantity::new(9.8, -2, 1, 1, 0, 0, 0, 0);
        assert_eq!(force.dimensions(), DimensionVector::new(-2, 1, 1, 0, 0, 0, 0));

        let templated = Quantity::with_template(2.0, &force);
        assert_eq!(templated.magnitude(), 2.0);
        assert!(templated.has_same_units(&force));

        let dims = Quantity::with_dimensions(1.0, DimensionVector::MOLE);
        assert_eq!(dims.dimensions().mole(), 1);
        assert_eq!(dims.in_base_units(), dims.magnitude());
    }

    #[test]
    fn test_checked_add() {
        let a = 2.0 * METER;
        let b = 3.0 * METER;
        let c = a.checked_add(b).unwrap();
        assert_eq!(c.magnitude(), 5.0);
        assert_eq!(c.dimensions(), DimensionVector::LENGTH);

        let err = a.checked_add(3.0 * SECOND).unwrap_err();
        assert_eq!(
            err,
            mismatch(Operation::Add, DimensionVector::LENGTH, DimensionVector::TIME)
        );
    }

    #[test]
    fn test_checked_sub() {
        let a = 1.0 * KILOMETER;
        let b = 250.0 * METER;
        assert_eq!(a.checked_sub(b).unwrap().magnitude(), 750.0);
        assert_eq!(
            b.checked_sub(1.0 * SECOND).unwrap_err().operation(),
            Operation::Subtract
        );
    }

    #[test]
    fn test_scalar_arithmetic_requires_unitless() {
        let u = 5.0 * UNITLESS;
        assert_eq!(u.checked_add_scalar(3.0).unwrap().magnitude(), 8.0);
        assert_eq!(u.checked_sub_scalar(3.0).unwrap().magnitude(), 2.0);

        let err = (5.0 * METER).checked_add_scalar(1.0).unwrap_err();
        assert_eq!(
            err,
            mismatch(Operation::Add, DimensionVector::LENGTH, DimensionVector::UNITLESS)
        );
        assert!((5.0 * METER).checked_sub_scalar(1.0).is_err());
    }

    #[test]
    fn test_unary_and_powers() {
        let a = -3.0 * SECOND;
        assert_eq!(a.unary_plus().magnitude(), -3.0);
        assert!(a.unary_plus().has_same_units(&a));
        assert_eq!(a.abs().magnitude(), 3.0);

        let hz = (2.0 * SECOND).recip();
        assert_eq!(hz.magnitude(), 0.5);
        assert_eq!(hz.dimensions(), -DimensionVector::TIME);

        let volume = (2.0 * METER).powi(3);
        assert_eq!(volume.magnitude(), 8.0);
        assert_eq!(volume.dimensions().length(), 3);
        assert!((2.0 * METER).powi(0).is_unitless());
    }

    #[test]
    fn test_extreme_exponents_do_not_panic() {
        let squared = (METER * METER).powi(i32::MAX);
        assert_eq!(squared.magnitude(), 1.0);
        assert_eq!(squared.dimensions().length(), -2);

        let product = Quantity::new(1.0, i32::MAX, 0, 0, 0, 0, 0, 0) * SECOND;
        assert_eq!(product.dimensions().time(), i32::MIN);

        let quotient = Quantity::new(1.0, i32::MIN, 0, 0, 0, 0, 0, 0) / SECOND;
        assert_eq!(quotient.dimensions().time(), i32::MAX);
        assert_eq!(quotient.recip().dimensions().time(), -i32::MAX);
    }

    #[test]
    fn test_comparison() {
        let a = 2.0 * METER;
        let b = 3.0 * METER;

        assert!(a.try_lt(&b).unwrap());
        assert!(a.try_le(&b).unwrap());
        assert!(!a.try_gt(&b).unwrap());
        assert!(!a.try_ge(&b).unwrap());
        assert!(a.try_le(&a).unwrap());
        assert!(a.try_ge(&a).unwrap());
        assert_eq!(a.compare(&b).unwrap(), -1);
        assert_eq!(b.compare(&a).unwrap(), 1);
        assert_eq!(a.compare(&a).unwrap(), 0);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(a.checked_min(b).unwrap().magnitude(), 2.0);
        assert_eq!(a.checked_max(b).unwrap().magnitude(), 3.0);
    }

    #[test]
    fn test_comparison_across_dimensions_fails() {
        let a = 2.0 * METER;
        let t = 2.0 * SECOND;
        let expected = mismatch(Operation::Compare, DimensionVector::LENGTH, DimensionVector::TIME);

        assert_eq!(a.try_lt(&t), Err(expected));
        assert_eq!(a.try_le(&t), Err(expected));
        assert_eq!(a.try_gt(&t), Err(expected));
        assert_eq!(a.try_ge(&t), Err(expected));
        assert_eq!(a.compare(&t), Err(expected));
        assert_eq!(a.try_cmp(&t), Err(expected));
        assert!(a.checked_max(t).is_err());
    }

    /// Equality between quantities of different dimensions is an error, never
    /// `false`. This is a deliberate contract.
    #[test]
    fn test_equality_across_dimensions_is_an_error_not_false() {
        let a = 2.0 * METER;
        let t = 2.0 * SECOND;
        let expected = mismatch(Operation::Equality, DimensionVector::LENGTH, DimensionVector::TIME);

        assert_eq!(a.try_eq(&t), Err(expected));
        assert_eq!(a.try_ne(&t), Err(expected));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = 1.0 * KILOMETER;
        let b = 1000.0 * METER;
        assert!(a.try_eq(&b).unwrap());
        assert!(!a.try_ne(&b).unwrap());

        let c = Quantity::with_template(1000.0 + 1e-9, &METER);
        assert!(!a.try_eq(&c).unwrap());
    }

    #[test]
    fn test_scalar_comparison() {
        let u = 2.0 * UNITLESS;
        assert!(u.try_eq_scalar(2.0).unwrap());
        assert_eq!(u.compare_scalar(1.0).unwrap(), 1);
        assert_eq!(Quantity::compare_scalar_rev(1.0, &u).unwrap(), -1);

        let m = 2.0 * METER;
        assert_eq!(
            m.try_eq_scalar(2.0),
            Err(mismatch(Operation::Equality, DimensionVector::LENGTH, DimensionVector::UNITLESS))
        );
        assert!(m.compare_scalar(2.0).is_err());
        assert!(Quantity::compare_scalar_rev(2.0, &m).is_err());
    }

    #[test]
    fn test_compare_nan_falls_through_to_less() {
        let nan = Quantity::with_template(f64::NAN, &METER);
        assert_eq!(nan.compare(&METER).unwrap(), -1);
        assert!(!nan.try_lt(&METER).unwrap());
        assert!(!nan.try_eq(&nan).unwrap());
    }

    #[test]
    fn test_value_in() {
        let d = 2500.0 * METER;
        assert_eq!(d.value_in(&KILOMETER).unwrap(), 2.5);
        assert_eq!((3.0 * SECOND).value_in(&MILLISECOND).unwrap(), 3000.0);

        let err = d.value_in(&SECOND).unwrap_err();
        assert_eq!(err.operation(), Operation::Convert);
    }

    #[test]
    fn test_display() {
        assert_eq!((5.0 * METER).to_string(), "5m^1");
        assert_eq!(Quantity::unitless(8.0).to_string(), "8");
        assert_eq!(Quantity::new(0.25, -1, 1, 0, 0, 0, 0, 0).to_string(), "0.25s^-1*m^1");
        assert_eq!(format!("{:?}", 5.0 * METER), "Quantity(5.0, m^1)");
    }

    #[test]
    fn test_display_honors_precision() {
        assert_eq!(format!("{:.2}", (1.0 / 3.0) * METER), "0.33m^1");
        assert_eq!(format!("{:.0}", 2.6 * SECOND), "3s^1");
        assert_eq!(format!("{:.3}", Quantity::unitless(0.5)), "0.500");
    }

    #[test]
    fn test_from_f64() {
        let q: Quantity = 3.0_f64.into();
        assert!(q.is_unitless());
        assert_eq!(q.magnitude(), 3.0);
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(15, 1); // 1.5
        let q = Quantity::from_decimal(d, &KILOMETER).unwrap();
        assert_eq!(q.magnitude(), 1500.0);
        assert!(q.has_same_units(&METER));
    }

    #[test]
    fn test_to_decimal() {
        let q = 2.5 * METER;
        assert_eq!(q.to_decimal().unwrap().to_string(), "2.5");
        assert!(Quantity::unitless(f64::NAN).to_decimal().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let q = 9.81 * crate::units::METER_PER_SECOND_SQUARED;
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert!(back.try_eq(&q).unwrap());
    }
}
