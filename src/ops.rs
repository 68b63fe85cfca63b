//! Arithmetic, shift, and comparison operators.
//!
//! Carry and borrow chains run across all limbs with explicit overflow
//! detection; the same chain serves the scalar and full-width forms. All
//! wrapping is silent, detecting overflow of ordinary arithmetic is the
//! caller's job.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAndAssign, BitOrAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign,
    Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::bigint::BigInt;

/// Add with carry: `a + b + carry`, returning the low limb and the carry out.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let wide = a as u128 + b as u128 + carry as u128;
    (wide as u64, (wide >> 64) as u64)
}

/// Subtract with borrow: `a - b - borrow`, returning the low limb and the
/// borrow out (0 or 1).
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let wide = (a as u128).wrapping_sub(b as u128 + borrow as u128);
    (wide as u64, ((wide >> 64) as u64) & 1)
}

// ============================================================================
// Addition and subtraction (identical to unsigned - two's complement)
// ============================================================================

impl<const LIMBS: usize> Add for BigInt<LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = [0u64; LIMBS];
        let mut carry = 0;
        for i in 0..LIMBS {
            (out[i], carry) = adc(self.limbs[i], rhs.limbs[i], carry);
        }
        Self { limbs: out }
    }
}

impl<const LIMBS: usize> Sub for BigInt<LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = [0u64; LIMBS];
        let mut borrow = 0;
        for i in 0..LIMBS {
            (out[i], borrow) = sbb(self.limbs[i], rhs.limbs[i], borrow);
        }
        Self { limbs: out }
    }
}

impl<const LIMBS: usize> AddAssign for BigInt<LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const LIMBS: usize> SubAssign for BigInt<LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const LIMBS: usize> Neg for BigInt<LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.twos_complement()
    }
}

// ============================================================================
// Scalar addition and subtraction
// ============================================================================

impl<const LIMBS: usize> AddAssign<u64> for BigInt<LIMBS> {
    fn add_assign(&mut self, scalar: u64) {
        let mut carry = scalar;
        for limb in self.limbs.iter_mut() {
            if carry == 0 {
                break;
            }
            let (sum, overflow) = limb.overflowing_add(carry);
            *limb = sum;
            carry = overflow as u64;
        }
    }
}

impl<const LIMBS: usize> SubAssign<u64> for BigInt<LIMBS> {
    fn sub_assign(&mut self, scalar: u64) {
        let mut borrow = scalar;
        for limb in self.limbs.iter_mut() {
            if borrow == 0 {
                break;
            }
            let (diff, underflow) = limb.overflowing_sub(borrow);
            *limb = diff;
            borrow = underflow as u64;
        }
    }
}

impl<const LIMBS: usize> AddAssign<i64> for BigInt<LIMBS> {
    /// A negative addend is redirected to subtraction of its magnitude.
    fn add_assign(&mut self, scalar: i64) {
        if scalar < 0 {
            *self -= scalar.unsigned_abs();
        } else {
            *self += scalar as u64;
        }
    }
}

impl<const LIMBS: usize> SubAssign<i64> for BigInt<LIMBS> {
    fn sub_assign(&mut self, scalar: i64) {
        if scalar < 0 {
            *self += scalar.unsigned_abs();
        } else {
            *self -= scalar as u64;
        }
    }
}

impl<const LIMBS: usize> Add<i64> for BigInt<LIMBS> {
    type Output = Self;

    fn add(mut self, scalar: i64) -> Self::Output {
        self += scalar;
        self
    }
}

impl<const LIMBS: usize> Sub<i64> for BigInt<LIMBS> {
    type Output = Self;

    fn sub(mut self, scalar: i64) -> Self::Output {
        self -= scalar;
        self
    }
}

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Add one, propagating a single unit carry.
    pub fn inc(&mut self) {
        for limb in self.limbs.iter_mut() {
            *limb = limb.wrapping_add(1);
            if *limb != 0 {
                break;
            }
        }
    }

    /// Subtract one, propagating a single unit borrow.
    pub fn dec(&mut self) {
        for limb in self.limbs.iter_mut() {
            let (next, borrow) = limb.overflowing_sub(1);
            *limb = next;
            if !borrow {
                break;
            }
        }
    }
}

// ============================================================================
// Shifts (logical in both directions)
// ============================================================================

impl<const LIMBS: usize> ShlAssign<u32> for BigInt<LIMBS> {
    fn shl_assign(&mut self, bits: u32) {
        if bits == 0 {
            return;
        }
        if bits >= Self::BITS {
            *self = Self::ZERO;
            return;
        }
        let words = (bits / 64) as usize;
        let shift = bits % 64;
        if words > 0 {
            for i in (words..LIMBS).rev() {
                self.limbs[i] = self.limbs[i - words];
            }
            for i in 0..words {
                self.limbs[i] = 0;
            }
        }
        if shift > 0 {
            for i in (1..LIMBS).rev() {
                self.limbs[i] = (self.limbs[i] << shift) | (self.limbs[i - 1] >> (64 - shift));
            }
            self.limbs[0] <<= shift;
        }
    }
}

impl<const LIMBS: usize> ShrAssign<u32> for BigInt<LIMBS> {
    /// Logical right shift: the high end is zero-filled regardless of sign.
    fn shr_assign(&mut self, bits: u32) {
        if bits == 0 {
            return;
        }
        if bits >= Self::BITS {
            *self = Self::ZERO;
            return;
        }
        let words = (bits / 64) as usize;
        let shift = bits % 64;
        if words > 0 {
            for i in 0..LIMBS - words {
                self.limbs[i] = self.limbs[i + words];
            }
            for i in LIMBS - words..LIMBS {
                self.limbs[i] = 0;
            }
        }
        if shift > 0 {
            for i in 0..LIMBS - 1 {
                self.limbs[i] = (self.limbs[i] >> shift) | (self.limbs[i + 1] << (64 - shift));
            }
            self.limbs[LIMBS - 1] >>= shift;
        }
    }
}

impl<const LIMBS: usize> Shl<u32> for BigInt<LIMBS> {
    type Output = Self;

    fn shl(mut self, bits: u32) -> Self::Output {
        self <<= bits;
        self
    }
}

impl<const LIMBS: usize> Shr<u32> for BigInt<LIMBS> {
    type Output = Self;

    fn shr(mut self, bits: u32) -> Self::Output {
        self >>= bits;
        self
    }
}

// ============================================================================
// Bitwise with scalar
// ============================================================================

impl<const LIMBS: usize> BitOrAssign<u64> for BigInt<LIMBS> {
    fn bitor_assign(&mut self, scalar: u64) {
        self.limbs[0] |= scalar;
    }
}

impl<const LIMBS: usize> BitAndAssign<u64> for BigInt<LIMBS> {
    fn bitand_assign(&mut self, scalar: u64) {
        self.limbs[0] &= scalar;
        for limb in self.limbs[1..].iter_mut() {
            *limb = 0;
        }
    }
}

// ============================================================================
// Multiplication
// ============================================================================

impl<const LIMBS: usize> Mul for BigInt<LIMBS> {
    type Output = Self;

    /// Schoolbook multiply, keeping only the low `64 * LIMBS` bits.
    ///
    /// Each partial product accumulates into 128 bits together with the
    /// existing column sum and carry. A negative operand is replaced by its
    /// magnitude up front and the result negated when exactly one side was
    /// negative.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut lhs = self;
        let mut other = rhs;
        let mut negate = false;
        if lhs.is_negative() {
            negate = !negate;
            lhs = -lhs;
        }
        if other.is_negative() {
            negate = !negate;
            other = -other;
        }
        let mut out = [0u64; LIMBS];
        for i in 0..LIMBS {
            let mut carry: u128 = 0;
            for j in 0..LIMBS - i {
                let product =
                    lhs.limbs[i] as u128 * other.limbs[j] as u128 + out[i + j] as u128 + carry;
                out[i + j] = product as u64;
                carry = product >> 64;
            }
        }
        let result = Self { limbs: out };
        if negate { -result } else { result }
    }
}

impl<const LIMBS: usize> MulAssign for BigInt<LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Widening schoolbook multiply into a double-width destination.
    ///
    /// Operands are interpreted as unsigned limb arrays; the final carry of
    /// each row lands in the high word, so the exact mathematical product is
    /// preserved for non-negative inputs. This is the workspace behind
    /// [`BigInt::mul_mod`].
    pub fn widening_mul<const WIDE: usize>(&self, rhs: &Self) -> BigInt<WIDE> {
        const {
            assert!(
                WIDE == 2 * LIMBS,
                "widening multiply needs a double-width destination"
            )
        }
        let mut out = [0u64; WIDE];
        for i in 0..LIMBS {
            let mut carry: u128 = 0;
            for j in 0..LIMBS {
                let product =
                    self.limbs[i] as u128 * rhs.limbs[j] as u128 + out[i + j] as u128 + carry;
                out[i + j] = product as u64;
                carry = product >> 64;
            }
            out[i + LIMBS] = carry as u64;
        }
        BigInt { limbs: out }
    }
}

impl<const LIMBS: usize> MulAssign<i64> for BigInt<LIMBS> {
    /// Multiply by a signed 64-bit scalar.
    ///
    /// A negative scalar negates the receiver first and multiplies by the
    /// magnitude; like the rest of the arithmetic surface this wraps silently
    /// if the receiver already used the sign limb.
    fn mul_assign(&mut self, scalar: i64) {
        let magnitude = if scalar < 0 {
            *self = -*self;
            scalar.unsigned_abs()
        } else {
            scalar as u64
        };
        let mut carry: u128 = 0;
        for limb in self.limbs.iter_mut() {
            let product = *limb as u128 * magnitude as u128 + carry;
            *limb = product as u64;
            carry = product >> 64;
        }
    }
}

impl<const LIMBS: usize> Mul<i64> for BigInt<LIMBS> {
    type Output = Self;

    fn mul(mut self, scalar: i64) -> Self::Output {
        self *= scalar;
        self
    }
}

// ============================================================================
// Comparison (top limb interpreted as signed, the rest as unsigned)
// ============================================================================

impl<const LIMBS: usize> Ord for BigInt<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        let top = (self.limbs[LIMBS - 1] as i64).cmp(&(other.limbs[LIMBS - 1] as i64));
        if top != Ordering::Equal {
            return top;
        }
        for i in (0..LIMBS - 1).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<const LIMBS: usize> PartialOrd for BigInt<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> PartialEq<i64> for BigInt<LIMBS> {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from(*other)
    }
}

impl<const LIMBS: usize> PartialOrd<i64> for BigInt<LIMBS> {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Self::from(*other)))
    }
}

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Compare absolute values.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        let lhs = self.abs();
        let rhs = other.abs();
        for i in (0..LIMBS).rev() {
            match lhs.limbs[i].cmp(&rhs.limbs[i]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// ============================================================================
// Division operators (algorithm lives in divide.rs)
// ============================================================================

impl<const LIMBS: usize> Div for BigInt<LIMBS> {
    type Output = Self;

    /// Floored quotient. Panics on a zero divisor; use
    /// [`BigInt::div_rem`] for a fallible variant.
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        self.div_rem_nonzero(&rhs).0
    }
}

impl<const LIMBS: usize> Rem for BigInt<LIMBS> {
    type Output = Self;

    /// Floored remainder, carrying the divisor's sign. Panics on a zero
    /// divisor; use [`BigInt::div_rem`] for a fallible variant.
    fn rem(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("attempt to calculate remainder with a divisor of zero");
        }
        self.div_rem_nonzero(&rhs).1
    }
}

impl<const LIMBS: usize> DivAssign for BigInt<LIMBS> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const LIMBS: usize> RemAssign for BigInt<LIMBS> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<const LIMBS: usize> Div<i64> for BigInt<LIMBS> {
    type Output = Self;

    fn div(self, scalar: i64) -> Self::Output {
        self / Self::from(scalar)
    }
}

impl<const LIMBS: usize> Rem<i64> for BigInt<LIMBS> {
    type Output = Self;

    fn rem(self, scalar: i64) -> Self::Output {
        self % Self::from(scalar)
    }
}
