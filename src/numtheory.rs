//! GCD, quadratic residue symbols, probabilistic primality, and modular
//! square roots.
//!
//! Everything here composes the modular layer; nothing reaches into the limb
//! representation beyond parity and low-bit residue checks.

use log::trace;
use rand::Rng;

use crate::bigint::BigInt;
use crate::error::Error;

/// Miller–Rabin round count used when the caller does not pick one.
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 44;

/// Trial divisors screened before the Miller–Rabin rounds.
const SMALL_PRIMES: [i64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Greatest common divisor by Stein's binary algorithm: strip shared
    /// factors of two, then subtract the smaller magnitude from the larger
    /// until one side reaches zero.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let mut a = a.abs();
        let mut b = b.abs();
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let mut shift = 0u32;
        while !a.is_odd() && !b.is_odd() {
            a >>= 1;
            b >>= 1;
            shift += 1;
        }
        while !a.is_odd() {
            a >>= 1;
        }
        loop {
            while !b.is_odd() {
                b >>= 1;
            }
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            b -= a;
            if b.is_zero() {
                break;
            }
        }
        a << shift
    }

    /// Plain Euclidean gcd. Slower than [`BigInt::gcd`], kept as the
    /// reference the binary variant is checked against.
    pub fn gcd_slow(a: &Self, b: &Self) -> Self {
        let mut a = a.abs();
        let mut b = b.abs();
        while !b.is_zero() {
            let r = a.div_rem_nonzero(&b).1;
            a = b;
            b = r;
        }
        a
    }

    /// Legendre symbol as Euler's criterion: `self^((p-1)/2) mod p`.
    ///
    /// For an odd prime `p` this is 1 for a residue, `p - 1` for a
    /// non-residue, and 0 when `p` divides `self`.
    pub fn legendre<const WIDE: usize>(&self, p: &Self) -> Result<Self, Error> {
        let exponent = (*p - Self::ONE) >> 1;
        self.pow_mod::<WIDE>(&exponent, p)
    }

    /// Jacobi symbol by iterated quadratic reciprocity. Returns -1, 0, or 1.
    ///
    /// The modulus must be a positive odd number; for an odd prime the result
    /// agrees with the Legendre symbol.
    pub fn jacobi(&self, n: &Self) -> Result<i32, Error> {
        if n.is_zero() || n.is_negative() || !n.is_odd() {
            return Err(Error::InvalidArgument(
                "jacobi symbol needs a positive odd modulus",
            ));
        }

        let mut a = *self;
        let mut n = *n;
        let mut sign = 1i32;

        if a.is_negative() {
            a = -a;
            if n.low_limb() & 3 == 3 {
                sign = -sign;
            }
        }
        a = a.div_rem_nonzero(&n).1;

        while !a.is_zero() {
            while !a.is_odd() {
                a >>= 1;
                let residue = n.low_limb() & 7;
                if residue == 3 || residue == 5 {
                    sign = -sign;
                }
            }
            std::mem::swap(&mut a, &mut n);
            if a.low_limb() & 3 == 3 && n.low_limb() & 3 == 3 {
                sign = -sign;
            }
            a = a.div_rem_nonzero(&n).1;
        }

        Ok(if n == Self::ONE { sign } else { 0 })
    }

    /// Miller–Rabin primality test with the default round count and the
    /// process RNG.
    pub fn miller_rabin<const WIDE: usize>(&self) -> bool {
        self.miller_rabin_with::<WIDE, _>(&mut rand::thread_rng(), DEFAULT_PRIMALITY_ROUNDS)
    }

    /// Miller–Rabin with an explicit witness source and round count.
    ///
    /// Probabilistic: a composite survives all rounds with probability at
    /// most `4^-rounds`.
    pub fn miller_rabin_with<const WIDE: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rounds: u32,
    ) -> bool {
        let n = *self;
        if n <= Self::ONE {
            return false;
        }
        if n == Self::from(2) || n == Self::from(3) {
            return true;
        }
        if !n.is_odd() {
            return false;
        }

        for &p in SMALL_PRIMES.iter() {
            let p = Self::from(p);
            if n.div_rem_nonzero(&p).1.is_zero() {
                return n == p;
            }
        }

        // n - 1 = d * 2^r with d odd
        let n_minus_1 = n - Self::ONE;
        let mut d = n_minus_1;
        let mut r = 0u32;
        while !d.is_odd() {
            d >>= 1;
            r += 1;
        }

        let two = Self::from(2);
        let n_minus_2 = n - two;
        'rounds: for round in 0..rounds {
            let a = Self::random_in_range(rng, &two, &n_minus_2);
            let Ok(mut x) = a.pow_mod::<WIDE>(&d, &n) else {
                return false;
            };
            if x == Self::ONE || x == n_minus_1 {
                continue;
            }
            for _ in 0..r.saturating_sub(1) {
                let Ok(square) = x.mul_mod::<WIDE>(&x, &n) else {
                    return false;
                };
                x = square;
                if x == n_minus_1 {
                    continue 'rounds;
                }
            }
            trace!("miller-rabin witness found in round {round}");
            return false;
        }
        true
    }

    /// Square root of `self` modulo the odd prime `p` (Tonelli–Shanks).
    ///
    /// Fails with [`Error::NotASquare`] when `self` is not a residue and
    /// [`Error::NotPrime`] when `p` does not pass Miller–Rabin. The companion
    /// root is `p - r`.
    pub fn tonelli<const WIDE: usize>(&self, p: &Self) -> Result<Self, Error> {
        if p.is_zero() {
            return Err(Error::InvalidArgument("modulus cannot be zero"));
        }
        let p = *p;
        let n = self.div_rem_nonzero(&p).1;
        if n.is_zero() || n == Self::ONE {
            return Ok(n);
        }
        if !p.is_odd() {
            return Err(Error::NotPrime);
        }
        if n.legendre::<WIDE>(&p)? != Self::ONE {
            return Err(Error::NotASquare);
        }
        if !p.miller_rabin::<WIDE>() {
            return Err(Error::NotPrime);
        }

        // p - 1 = q * 2^s with q odd
        let p_minus_1 = p - Self::ONE;
        let mut q = p_minus_1;
        let mut s = 0u32;
        while !q.is_odd() {
            q >>= 1;
            s += 1;
        }

        if s == 1 {
            let exponent = (p + Self::ONE) >> 2;
            return n.pow_mod::<WIDE>(&exponent, &p);
        }

        // Smallest quadratic non-residue.
        let mut z = Self::from(2);
        while z.legendre::<WIDE>(&p)? != p_minus_1 {
            z.inc();
        }
        trace!("tonelli non-residue: {}", z.to_decimal_string());

        let mut c = z.pow_mod::<WIDE>(&q, &p)?;
        let mut r = n.pow_mod::<WIDE>(&((q + Self::ONE) >> 1), &p)?;
        let mut t = n.pow_mod::<WIDE>(&q, &p)?;
        let mut m = s;

        loop {
            if (t - Self::ONE).div_rem_nonzero(&p).1.is_zero() {
                return Ok(r);
            }

            // Smallest i in [1, m) with t^(2^i) == 1 (mod p).
            let mut i = 0u32;
            let mut square = t;
            while square != Self::ONE {
                square = square.mul_mod::<WIDE>(&square, &p)?;
                i += 1;
                if i == m {
                    return Err(Error::NotASquare);
                }
            }

            let mut b = c;
            for _ in 0..m - i - 1 {
                b = b.mul_mod::<WIDE>(&b, &p)?;
            }
            r = r.mul_mod::<WIDE>(&b, &p)?;
            c = b.mul_mod::<WIDE>(&b, &p)?;
            t = t.mul_mod::<WIDE>(&c, &p)?;
            m = i;
        }
    }
}
