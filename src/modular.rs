//! Modular multiply, exponentiation, and inverse.
//!
//! `mul_mod` is the load-bearing primitive: the exact product is formed in a
//! double-width workspace before reduction, so no intermediate ever wraps.
//! The `WIDE` const parameter is that workspace's limb count and must be
//! `2 * LIMBS`; the named width aliases pair up as `Int256`/`Int512`,
//! `Int320`/`Int640`, and so on.

use crate::bigint::BigInt;
use crate::error::Error;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// `(self * rhs) mod modulus` without intermediate overflow.
    ///
    /// Operands are sign-normalized to magnitudes, multiplied into the
    /// double-width workspace, reduced, and the result negated and re-reduced
    /// when exactly one operand was negative. The reduced value carries the
    /// modulus's sign, matching the floored division rule.
    pub fn mul_mod<const WIDE: usize>(&self, rhs: &Self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut negate = false;
        let mut lhs = *self;
        let mut other = *rhs;
        if lhs.is_negative() {
            negate = !negate;
            lhs = -lhs;
        }
        if other.is_negative() {
            negate = !negate;
            other = -other;
        }

        let product: BigInt<WIDE> = lhs.widening_mul(&other);

        // Reduce in whichever width the operands demand. The narrowing copy's
        // sign check certifies that the reduced value fits the native width.
        let mut reduced: Self;
        if product.bit_length() >= Self::BITS || modulus.bit_length() >= Self::BITS {
            let wide_modulus: BigInt<WIDE> = modulus.resize()?;
            let wide_reduced = product.div_rem_nonzero(&wide_modulus).1;
            reduced = wide_reduced.resize()?;
        } else {
            reduced = product.resize()?;
            reduced = reduced.div_rem_nonzero(modulus).1;
        }

        if negate {
            reduced = (-reduced).div_rem_nonzero(modulus).1;
        }
        Ok(reduced)
    }

    /// `self^exponent mod modulus` by binary exponentiation.
    ///
    /// A negative exponent raises the modular inverse of the base to the
    /// negated exponent, so it fails with [`Error::NoInverse`] when
    /// `gcd(self, modulus) != 1`.
    pub fn pow_mod<const WIDE: usize>(
        &self,
        exponent: &Self,
        modulus: &Self,
    ) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::InvalidArgument("modulus cannot be zero"));
        }
        if exponent.is_negative() {
            let inverse = self.inverse_mod(modulus)?;
            return inverse.pow_mod::<WIDE>(&-*exponent, modulus);
        }

        let mut result = Self::ONE;
        let mut base = self.div_rem_nonzero(modulus).1;
        let mut exp = *exponent;
        while exp > Self::ZERO {
            if exp.is_odd() {
                result = result.mul_mod::<WIDE>(&base, modulus)?;
            }
            exp >>= 1;
            base = base.mul_mod::<WIDE>(&base, modulus)?;
        }
        Ok(result)
    }

    /// Modular inverse by the extended Euclidean algorithm.
    ///
    /// A negative modulus yields the negative representative:
    /// `inverse_mod(|m|) + m`.
    pub fn inverse_mod(&self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::InvalidArgument("modulus cannot be zero"));
        }
        if modulus.is_negative() {
            let inverse = self.inverse_mod(&-*modulus)?;
            return Ok(inverse + *modulus);
        }
        if *modulus == Self::ONE {
            return Ok(Self::ZERO);
        }

        let mut a = self.div_rem_nonzero(modulus).1;
        let mut m = *modulus;
        let mut x0 = Self::ZERO;
        let mut x1 = Self::ONE;

        while a > Self::ONE {
            if m.is_zero() {
                return Err(Error::NoInverse);
            }
            let (q, r) = a.div_rem_nonzero(&m);
            a = m;
            m = r;
            let t = x0;
            x0 = x1 - q * x0;
            x1 = t;
        }

        if a != Self::ONE {
            return Err(Error::NoInverse);
        }
        if x1.is_negative() {
            x1 += *modulus;
        }
        Ok(x1)
    }
}
