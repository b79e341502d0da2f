// ============================================================================
// Quantity Operators
// std::ops implementations over Quantity and raw f64 scalars
// ============================================================================
//
// Operand matrix:
//
//   op   Quantity⊗Quantity    Quantity⊗f64         f64⊗Quantity
//   +    same dims (Result)   unitless (Result)    unitless (Result)
//   -    same dims (Result)   unitless (Result)    unitless (Result)
//   *    dims add             dims kept            dims kept
//   /    dims subtract        dims kept            dims negated
//
// Fallible operators yield QuantityResult<Quantity>, so chains read
// `((a + b)? - c)?`.

use super::errors::{Operation, QuantityResult};
use super::quantity::Quantity;
use std::iter::Product;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Addition / Subtraction
// ============================================================================

impl Add for Quantity {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn add(self, rhs: Quantity) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Quantity {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn sub(self, rhs: Quantity) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Add<f64> for Quantity {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.checked_add_scalar(rhs)
    }
}

impl Sub<f64> for Quantity {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.checked_sub_scalar(rhs)
    }
}

impl Add<Quantity> for f64 {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn add(self, rhs: Quantity) -> Self::Output {
        rhs.require_unitless(Operation::Add)?;
        Ok(Quantity::unitless(self + rhs.magnitude()))
    }
}

impl Sub<Quantity> for f64 {
    type Output = QuantityResult<Quantity>;

    #[inline]
    fn sub(self, rhs: Quantity) -> Self::Output {
        rhs.require_unitless(Operation::Subtract)?;
        Ok(Quantity::unitless(self - rhs.magnitude()))
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::with_template(-self.magnitude(), &self)
    }
}

// ============================================================================
// Multiplication / Division (never fail)
// ============================================================================

impl Mul for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        Quantity::with_dimensions(
            self.magnitude() * rhs.magnitude(),
            self.dimensions().add(rhs.dimensions()),
        )
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Quantity::with_template(self.magnitude() * rhs, &self)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        Quantity::with_template(self * rhs.magnitude(), &rhs)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        Quantity::with_dimensions(
            self.magnitude() / rhs.magnitude(),
            self.dimensions().subtract(rhs.dimensions()),
        )
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Quantity::with_template(self.magnitude() / rhs, &self)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        Quantity::with_dimensions(self / rhs.magnitude(), rhs.dimensions().negate())
    }
}

/// Product of any number of quantities; the empty product is unitless `1`.
impl Product for Quantity {
    fn product<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::unitless(1.0), |acc, q| acc * q)
    }
}
