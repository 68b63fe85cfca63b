//! Affine arithmetic on a Montgomery curve `y^2 = x^3 + A*x^2 + x (mod p)`.
//!
//! Everything is expressed through the public bignum surface: `mul_mod` for
//! products, `pow_mod`/`inverse_mod` for slopes, `legendre` + `tonelli` to
//! recover a point from its x-coordinate.
//!
//! Not constant time; scalar multiplication branches on key bits. The width
//! also needs a few spare bits beyond the modulus because intermediate sums
//! combine up to three signed values.

use std::fmt;

use crate::bigint::BigInt;
use crate::error::Error;

/// Affine curve point. `(0, 0)` encodes the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<const LIMBS: usize> {
    pub x: BigInt<LIMBS>,
    pub y: BigInt<LIMBS>,
}

impl<const LIMBS: usize> Point<LIMBS> {
    pub const IDENTITY: Self = Self {
        x: BigInt::ZERO,
        y: BigInt::ZERO,
    };

    pub fn new(x: BigInt<LIMBS>, y: BigInt<LIMBS>) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<const LIMBS: usize> Default for Point<LIMBS> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const LIMBS: usize> fmt::Display for Point<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Montgomery curve with coefficient `A` over the prime field `p`.
///
/// `WIDE` is the double-width workspace limb count, `2 * LIMBS`.
pub struct MontgomeryCurve<const LIMBS: usize, const WIDE: usize> {
    modulus: BigInt<LIMBS>,
    coeff_a: BigInt<LIMBS>,
}

impl<const LIMBS: usize, const WIDE: usize> MontgomeryCurve<LIMBS, WIDE> {
    pub fn new(coeff_a: BigInt<LIMBS>, modulus: BigInt<LIMBS>) -> Self {
        Self { modulus, coeff_a }
    }

    pub fn modulus(&self) -> &BigInt<LIMBS> {
        &self.modulus
    }

    /// Tangent-rule doubling. A point with `y = 0` doubles to the identity.
    pub fn point_double(&self, point: &Point<LIMBS>) -> Result<Point<LIMBS>, Error> {
        if point.y.is_zero() {
            return Ok(Point::IDENTITY);
        }
        let p = &self.modulus;
        let x = point.x;
        let y = point.y;

        // lambda = (3x^2 + 2Ax + 1) / 2y
        let mut numerator = x.mul_mod::<WIDE>(&(x * 3), p)?;
        numerator += self.coeff_a.mul_mod::<WIDE>(&(x * 2), p)?;
        numerator.inc();
        numerator = numerator.div_rem(p)?.1;
        let denominator = (y * 2).pow_mod::<WIDE>(&BigInt::from(-1), p)?;
        let lambda = numerator.mul_mod::<WIDE>(&denominator, p)?;

        let mut x_out = lambda.mul_mod::<WIDE>(&lambda, p)?;
        x_out -= x * 2 + self.coeff_a;
        x_out = x_out.div_rem(p)?.1;

        let mut y_out = lambda.mul_mod::<WIDE>(&(x_out - x), p)?;
        y_out += y;
        y_out = (-y_out).div_rem(p)?.1;

        Ok(Point::new(x_out, y_out))
    }

    /// Chord-rule addition of two distinct points.
    pub fn point_add(
        &self,
        point1: &Point<LIMBS>,
        point2: &Point<LIMBS>,
    ) -> Result<Point<LIMBS>, Error> {
        if point1.is_identity() {
            return Ok(*point2);
        }
        if point2.is_identity() {
            return Ok(*point1);
        }
        let p = &self.modulus;

        // lambda = (y2 - y1) / (x2 - x1)
        let numerator = (point2.y - point1.y).div_rem(p)?.1;
        let denominator = (point2.x - point1.x).inverse_mod(p)?;
        let lambda = numerator.mul_mod::<WIDE>(&denominator, p)?;

        let mut x_out = lambda.mul_mod::<WIDE>(&lambda, p)?;
        x_out -= point1.x;
        x_out -= point2.x;
        x_out -= self.coeff_a;
        x_out = x_out.div_rem(p)?.1;

        let mut y_out = lambda.mul_mod::<WIDE>(&(point1.x - x_out), p)?;
        y_out -= point1.y;
        y_out = y_out.div_rem(p)?.1;

        Ok(Point::new(x_out, y_out))
    }

    /// Right-to-left binary double-and-add. Branches on scalar bits, so the
    /// run time leaks the scalar.
    pub fn scalar_multiply(
        &self,
        k: &BigInt<LIMBS>,
        point: &Point<LIMBS>,
    ) -> Result<Point<LIMBS>, Error> {
        let mut result = Point::IDENTITY;
        let mut current = *point;
        let mut scalar = *k;
        while !scalar.is_zero() {
            if scalar.is_odd() {
                result = self.point_add(&result, &current)?;
            }
            current = self.point_double(&current)?;
            scalar >>= 1;
        }
        Ok(result)
    }

    /// Recover the point with the given x-coordinate, picking the root
    /// Tonelli–Shanks finds. Fails with [`Error::NotASquare`] when no point
    /// has that x.
    pub fn point_for_x(&self, x: &BigInt<LIMBS>) -> Result<Point<LIMBS>, Error> {
        let p = &self.modulus;
        let mut y_squared = x.pow_mod::<WIDE>(&BigInt::from(3), p)?;
        y_squared += self.coeff_a.mul_mod::<WIDE>(&x.mul_mod::<WIDE>(x, p)?, p)?;
        y_squared += *x;
        y_squared = y_squared.div_rem(p)?.1;
        if y_squared.legendre::<WIDE>(p)? != BigInt::ONE {
            return Err(Error::NotASquare);
        }
        Ok(Point::new(*x, y_squared.tonelli::<WIDE>(p)?))
    }

    pub fn is_on_curve(&self, point: &Point<LIMBS>) -> Result<bool, Error> {
        let p = &self.modulus;
        let left = point.y.mul_mod::<WIDE>(&point.y, p)?;
        let mut right = point.x.pow_mod::<WIDE>(&BigInt::from(3), p)?;
        right += self
            .coeff_a
            .mul_mod::<WIDE>(&point.x.mul_mod::<WIDE>(&point.x, p)?, p)?;
        right += point.x;
        right = right.div_rem(p)?.1;
        Ok(left == right)
    }
}
