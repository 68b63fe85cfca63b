//! Fixed-width signed integer stored as little-endian 64-bit limbs.
//!
//! Uses two's complement representation. The high limb's MSB is the sign bit.
//! Addition, subtraction, and wrapping multiplication are bitwise identical to
//! unsigned operations; sign only matters for comparison, division, printing,
//! and the modular layer.

use crate::error::Error;

/// Signed integer of `64 * LIMBS` bits stored as `LIMBS` little-endian limbs.
///
/// The limb count is fixed at compile time; all arithmetic is modulo
/// `2^(64 * LIMBS)` on the raw bits. Zero has all limbs zero and is
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigInt<const LIMBS: usize> {
    pub(crate) limbs: [u64; LIMBS],
}

pub type Int64 = BigInt<1>;
pub type Int128 = BigInt<2>;
pub type Int256 = BigInt<4>;
pub type Int320 = BigInt<5>;
pub type Int512 = BigInt<8>;
pub type Int640 = BigInt<10>;
pub type Int1024 = BigInt<16>;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Total bit width of the type.
    pub const BITS: u32 = 64 * LIMBS as u32;

    pub const ZERO: Self = Self { limbs: [0; LIMBS] };
    pub const ONE: Self = {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = 1;
        Self { limbs }
    };
    /// Most negative value: sign bit set, everything else clear.
    pub const MIN: Self = {
        let mut limbs = [0u64; LIMBS];
        limbs[LIMBS - 1] = 1 << 63;
        Self { limbs }
    };
    /// Most positive value: sign bit clear, everything else set.
    pub const MAX: Self = {
        let mut limbs = [u64::MAX; LIMBS];
        limbs[LIMBS - 1] = u64::MAX >> 1;
        Self { limbs }
    };

    #[inline]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self { limbs }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        (self.limbs[LIMBS - 1] as i64) < 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Least significant limb.
    #[inline]
    pub fn low_limb(&self) -> u64 {
        self.limbs[0]
    }

    /// Limb read by index, little-endian order.
    pub fn limb(&self, index: usize) -> Result<u64, Error> {
        self.limbs
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange(index))
    }

    /// Limb write by index, little-endian order.
    pub fn set_limb(&mut self, index: usize, value: u64) -> Result<(), Error> {
        match self.limbs.get_mut(index) {
            Some(limb) => {
                *limb = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange(index)),
        }
    }

    pub fn set_bit(&mut self, bit: u32) -> Result<(), Error> {
        if bit >= Self::BITS {
            return Err(Error::IndexOutOfRange(bit as usize));
        }
        self.limbs[(bit / 64) as usize] |= 1 << (bit % 64);
        Ok(())
    }

    pub fn clear_bit(&mut self, bit: u32) -> Result<(), Error> {
        if bit >= Self::BITS {
            return Err(Error::IndexOutOfRange(bit as usize));
        }
        self.limbs[(bit / 64) as usize] &= !(1 << (bit % 64));
        Ok(())
    }

    /// Bitwise invert plus one, with the carry propagated across all limbs.
    /// This is unary negation in two's complement.
    pub fn twos_complement(&self) -> Self {
        let mut out = [0u64; LIMBS];
        let mut carry: u128 = 1;
        for (i, &limb) in self.limbs.iter().enumerate() {
            let inverted = (!limb) as u128 + carry;
            out[i] = inverted as u64;
            carry = inverted >> 64;
        }
        Self { limbs: out }
    }

    /// Absolute value. Note: `MIN.abs()` wraps (returns `MIN`).
    #[inline]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.twos_complement()
        } else {
            *self
        }
    }

    /// Position of the highest set bit of the absolute value; 0 for zero.
    ///
    /// Negative values report the bit length of their negation, so `-1` has
    /// bit length 1, not the full width.
    pub fn bit_length(&self) -> u32 {
        let magnitude = self.abs();
        for i in (0..LIMBS).rev() {
            if magnitude.limbs[i] != 0 {
                return 64 * i as u32 + (64 - magnitude.limbs[i].leading_zeros());
            }
        }
        0
    }

    /// Copy into a different limb count, sign-extending when widening.
    ///
    /// Fails with [`Error::Overflow`] when the destination's sign bit would
    /// disagree with the source's sign, i.e. the value does not fit.
    pub fn resize<const TO: usize>(&self) -> Result<BigInt<TO>, Error> {
        let mut limbs = [0u64; TO];
        let shared = if TO < LIMBS { TO } else { LIMBS };
        limbs[..shared].copy_from_slice(&self.limbs[..shared]);
        if self.is_negative() {
            for limb in limbs[shared..].iter_mut() {
                *limb = u64::MAX;
            }
        }
        let copied = BigInt { limbs };
        if copied.is_negative() != self.is_negative() {
            return Err(Error::Overflow);
        }
        Ok(copied)
    }

    /// Reverse the low `num_bytes` bytes of the value and clear the rest.
    ///
    /// Key material on the wire is little-endian; this converts between that
    /// order and the integer interpretation used everywhere else.
    pub fn reverse_byte_order(&self, num_bytes: usize) -> Self {
        let mut bytes: Vec<u8> = self
            .limbs
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        let count = num_bytes.min(bytes.len());
        bytes[..count].reverse();
        for byte in bytes[count..].iter_mut() {
            *byte = 0;
        }
        let mut limbs = [0u64; LIMBS];
        for (i, &byte) in bytes.iter().enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        Self { limbs }
    }
}

impl<const LIMBS: usize> Default for BigInt<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> From<i64> for BigInt<LIMBS> {
    /// Sign-extend a 64-bit scalar to the full width.
    fn from(scalar: i64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = scalar.unsigned_abs();
        let value = Self { limbs };
        if scalar < 0 {
            value.twos_complement()
        } else {
            value
        }
    }
}
