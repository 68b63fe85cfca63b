//! Random value generation.
//!
//! Adapters over any [`rand::Rng`]; the library never seeds or owns a
//! generator itself except for the [`miller_rabin`](crate::BigInt::miller_rabin)
//! convenience wrapper. Nothing here is cryptographically hardened.

use rand::Rng;

use crate::bigint::BigInt;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Random value of at most `num_bits` bits, optionally negated.
    ///
    /// Fills whole limbs, masks the top one down to the remaining bit count,
    /// and always clears the sign bit before the optional negation.
    pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, num_bits: u32, negative: bool) -> Self {
        if num_bits == 0 {
            return Self::ZERO;
        }
        let num_bits = num_bits.min(Self::BITS);
        let words = num_bits.div_ceil(64) as usize;

        let mut result = Self::ZERO;
        for i in 0..words {
            result.limbs[i] = rng.next_u64();
        }
        let remaining = num_bits % 64;
        if remaining > 0 {
            result.limbs[words - 1] &= (1u64 << remaining) - 1;
        }
        result.limbs[LIMBS - 1] &= !(1u64 << 63);

        if negative { -result } else { result }
    }

    /// Uniform-ish random value in `[min, max]`, inclusive.
    ///
    /// Consumes 64 random bits per limb of the span, reducing each chunk
    /// modulo the remaining range and accumulating at place value `2^(64k)`.
    /// The chunk-wise reduction biases the distribution slightly; acceptable
    /// here since no caller needs exact uniformity.
    pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        let span = *max - *min + Self::ONE;
        if span <= Self::ZERO {
            return *min;
        }

        let mut range = span;
        let mut result = Self::ZERO;
        let mut multiplier = Self::ONE;
        while range > Self::ZERO {
            let mut chunk = Self::ZERO;
            chunk.limbs[0] = rng.next_u64();
            chunk = chunk.div_rem_nonzero(&range).1;
            result += chunk * multiplier;
            range >>= 64;
            multiplier <<= 64;
        }

        *min + result.div_rem_nonzero(&span).1
    }
}
