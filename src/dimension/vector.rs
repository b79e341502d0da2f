// ============================================================================
// Dimension Vector
// Exponents over the seven SI base dimensions and their combination rules
// ============================================================================

use super::base::BaseDimension;
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const N: usize = BaseDimension::COUNT;

/// Signed integer exponents over the seven SI base dimensions.
///
/// Stored in canonical order: time, length, mass, current, temperature,
/// mole, intensity. Two vectors are equal iff every exponent matches.
///
/// Multiplying quantities adds their vectors, dividing subtracts them and
/// taking a reciprocal negates.
///
/// # Example
/// ```
/// use si_quantity::dimension::DimensionVector;
///
/// let velocity = DimensionVector::LENGTH - DimensionVector::TIME;
/// assert_eq!(velocity.length(), 1);
/// assert_eq!(velocity.time(), -1);
/// assert!((velocity + DimensionVector::TIME - DimensionVector::LENGTH).is_unitless());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionVector([i32; N]);

impl DimensionVector {
    /// All exponents zero.
    pub const UNITLESS: Self = Self([0; N]);

    pub const TIME: Self = Self::base(BaseDimension::Time);
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    pub const MOLE: Self = Self::base(BaseDimension::Mole);
    pub const INTENSITY: Self = Self::base(BaseDimension::Intensity);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the seven exponents in canonical order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        time: i32,
        length: i32,
        mass: i32,
        current: i32,
        temperature: i32,
        mole: i32,
        intensity: i32,
    ) -> Self {
        Self([time, length, mass, current, temperature, mole, intensity])
    }

    /// Create from an exponent array in canonical order.
    #[inline]
    pub const fn from_exponents(exponents: [i32; N]) -> Self {
        Self(exponents)
    }

    /// The vector with exponent 1 for `dim` and 0 elsewhere.
    pub const fn base(dim: BaseDimension) -> Self {
        let mut exponents = [0; N];
        exponents[dim.index()] = 1;
        Self(exponents)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All exponents in canonical order.
    #[inline]
    pub const fn exponents(&self) -> [i32; N] {
        self.0
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub const fn exponent(&self, dim: BaseDimension) -> i32 {
        self.0[dim.index()]
    }

    #[inline]
    pub const fn time(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub const fn length(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub const fn mass(&self) -> i32 {
        self.0[2]
    }

    #[inline]
    pub const fn current(&self) -> i32 {
        self.0[3]
    }

    #[inline]
    pub const fn temperature(&self) -> i32 {
        self.0[4]
    }

    #[inline]
    pub const fn mole(&self) -> i32 {
        self.0[5]
    }

    #[inline]
    pub const fn intensity(&self) -> i32 {
        self.0[6]
    }

    /// Iterate `(dimension, exponent)` pairs in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .into_iter()
            .map(move |d| (d, self.0[d.index()]))
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Elementwise equality, usable in const contexts.
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True iff all seven exponents are zero.
    pub const fn is_unitless(&self) -> bool {
        self.equals(&Self::UNITLESS)
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// Elementwise sum (dimensions of a product). Exponents wrap on
    /// overflow, so the algebra stays total.
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, rhs: Self) -> Self {
        let mut out = [0; N];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i].wrapping_add(rhs.0[i]);
            i += 1;
        }
        Self(out)
    }

    /// Elementwise difference (dimensions of a quotient).
    pub const fn subtract(self, rhs: Self) -> Self {
        self.add(rhs.negate())
    }

    /// Elementwise negation (dimensions of a reciprocal).
    pub const fn negate(self) -> Self {
        self.scale(-1)
    }

    /// Multiply every exponent by `n` (dimensions of an integer power),
    /// wrapping on overflow.
    pub const fn scale(self, n: i32) -> Self {
        let mut out = [0; N];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i].wrapping_mul(n);
            i += 1;
        }
        Self(out)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Add for DimensionVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DimensionVector::add(self, rhs)
    }
}

impl Sub for DimensionVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Neg for DimensionVector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<[i32; N]> for DimensionVector {
    fn from(exponents: [i32; N]) -> Self {
        Self(exponents)
    }
}

impl From<BaseDimension> for DimensionVector {
    fn from(dim: BaseDimension) -> Self {
        Self::base(dim)
    }
}

/// Renders the unit suffix (e.g. `s^-1*m^1`), or `unitless` when every
/// exponent is zero.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unitless() {
            f.write_str("unitless")
        } else {
            crate::format::UnitFormatter::si().write_suffix(f, self)
        }
    }
}
