//! Signed long division.
//!
//! Floored semantics: for dividend `a` and non-zero divisor `d`, the pair
//! `(q, r)` satisfies `a == q * d + r`, with `r` carrying the divisor's sign
//! (or zero) and `|r| < |d|`.
//!
//! # Algorithm overview
//!
//! 1. Replace both operands by magnitudes, tracking the quotient sign.
//! 2. Normalize by a shift that makes the divisor's top chunk close to a
//!    full limb, clamped so the dividend keeps its sign bit clear.
//! 3. Repeatedly scan the remainder top-down, assembling a 128-bit running
//!    dividend and dividing it by `top_limb + 1`. Because that chunk divisor
//!    over-estimates, every subquotient is an under-estimate of what is left,
//!    so the loop converges; a final trial subtraction finishes the job.
//! 4. Denormalize and apply the floored-division sign fixup.

use crate::bigint::BigInt;
use crate::error::Error;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Floored quotient and remainder.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let mut quotient = Self::ZERO;
        let mut remainder = *self;
        let mut d = *divisor;

        let mut negate = false;
        if remainder.is_negative() {
            negate = !negate;
            remainder = -remainder;
        }
        if d.is_negative() {
            negate = !negate;
            d = -d;
        }

        // Top non-zero limbs of divisor and remainder.
        let kd = (1..LIMBS).rev().find(|&i| d.limbs[i] != 0).unwrap_or(0);
        let mut kr = (1..LIMBS)
            .rev()
            .find(|&i| remainder.limbs[i] != 0)
            .unwrap_or(0);

        // Pick a shift that maximizes the bits in the chunk divisor without
        // turning it negative, then clamp it so the shifted remainder keeps a
        // clear sign bit.
        let chunk = d.limbs[kd] as u128 + 1;
        let mut shift: i32 = if chunk < u64::MAX as u128 {
            (chunk as u64).leading_zeros() as i32
        } else {
            0
        };
        if kd == LIMBS - 1 {
            shift -= 1;
        }
        let r_length = remainder.bit_length() as i32 + shift + 1;
        if r_length > Self::BITS as i32 {
            shift -= r_length - Self::BITS as i32;
        }
        // A divisor already touching the sign limb can drive the shift below
        // zero; the loop needs no normalization in that case.
        let shift = shift.max(0) as u32;

        remainder <<= shift;
        d <<= shift;
        let chunk_divisor = d.limbs[kd] as u128 + 1;

        // The shift may have pushed the remainder's top limb up one word.
        kr = (kr + 1).min(LIMBS - 1);
        while kr > 0 && remainder.limbs[kr] == 0 {
            kr -= 1;
        }

        loop {
            let mut chunk_dividend: u128 = 0;
            let mut subquotient = Self::ZERO;

            while kr > 0 && remainder.limbs[kr] == 0 {
                kr -= 1;
            }
            let mut k = kr as isize;
            while k >= kd as isize {
                chunk_dividend |= remainder.limbs[k as usize] as u128;
                if chunk_dividend < chunk_divisor {
                    chunk_dividend <<= 64;
                    k -= 1;
                    continue;
                }
                let digit = (chunk_dividend / chunk_divisor) as u64;
                subquotient <<= 64;
                subquotient |= digit;
                chunk_dividend -= digit as u128 * chunk_divisor;
                chunk_dividend <<= 64;
                k -= 1;
            }

            if subquotient.is_zero() {
                if remainder >= d {
                    quotient.inc();
                    remainder -= d;
                }
                break;
            }

            remainder -= subquotient * d;
            quotient += subquotient;
        }

        remainder >>= shift;

        if negate {
            quotient = -quotient;
        }

        // The divisor dictates the remainder's sign.
        if divisor.is_negative() {
            remainder = -remainder;
        }

        // Floored-division correction when the operand signs differ.
        if divisor.is_negative() != self.is_negative() && !remainder.is_zero() {
            quotient.dec();
            remainder = *divisor - remainder;
        }

        (quotient, remainder)
    }
}
